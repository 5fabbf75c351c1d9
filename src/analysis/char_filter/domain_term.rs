use super::{CharFilter, Transformation, splice};
use crate::analysis::diagnostic::Diagnostics;
use crate::error::Result;
use crate::lexicon::DomainTermGroup;

/// Folds every spelling variant of one domain-term group to its canonical
/// form, e.g. "Long Covid" and "#long_covid" to "longcovid".
#[derive(Clone, Debug)]
pub struct DomainTermCharFilter {
    group: DomainTermGroup,
}

impl DomainTermCharFilter {
    pub fn new(group: DomainTermGroup) -> Self {
        DomainTermCharFilter { group }
    }

    pub fn group(&self) -> &DomainTermGroup {
        &self.group
    }
}

impl CharFilter for DomainTermCharFilter {
    fn filter(
        &self,
        input: &str,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(String, Vec<Transformation>)> {
        let canonical = self.group.canonical();
        let edits = self
            .group
            .pattern()
            .find_iter(input)
            .map(|m| (m.range(), canonical.to_string()));

        Ok(splice(input, edits))
    }

    fn name(&self) -> &'static str {
        "domain_term"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_variants() {
        let group = DomainTermGroup::new(
            "longcovid",
            vec!["long covid", "#longcovid", "#long_covid", "long-covid"],
        )
        .unwrap();
        let filter = DomainTermCharFilter::new(group);

        let (output, transformations) = filter
            .filter(
                "Long Covid and #LongCovid, long-covid",
                &mut Diagnostics::new(),
            )
            .unwrap();

        assert_eq!(output, "longcovid and longcovid, longcovid");
        assert_eq!(transformations.len(), 3);
    }

    #[test]
    fn test_groups_apply_in_sequence() {
        let long = DomainTermCharFilter::new(
            DomainTermGroup::new("longcovid", vec!["long covid"]).unwrap(),
        );
        let covid = DomainTermCharFilter::new(
            DomainTermGroup::new("covid", vec!["covid-19", "covid19"]).unwrap(),
        );

        let mut diagnostics = Diagnostics::new();
        let (text, _) = long.filter("long covid after covid-19", &mut diagnostics).unwrap();
        let (text, _) = covid.filter(&text, &mut diagnostics).unwrap();

        assert_eq!(text, "longcovid after covid");
    }
}
