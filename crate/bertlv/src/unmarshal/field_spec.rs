/// A parsed field binding: the tag to look up and optional conversion
/// hints, written as a comma-separated list in the serde rename string,
/// e.g. `"50,ascii"`.
pub(super) struct FieldSpec<'a> {
    pub(super) tag: &'a str,
    options: Vec<&'a str>,
}

impl<'a> FieldSpec<'a> {
    pub(super) fn parse(field: &'a str) -> Self {
        let mut splits = field.split(',');
        Self {
            tag: splits.next().unwrap_or(""),
            options: splits.collect(),
        }
    }

    pub(super) fn has_option(&self, option: &str) -> bool {
        self.options.contains(&option)
    }
}
