//! Class-token composition shared by the primitive set.

/// Joins class tokens into one space-separated `class` attribute value.
///
/// Every item is split on whitespace first, so callers can mix single
/// tokens with prebuilt token groups. When the same token appears more
/// than once only the last occurrence is kept, which lets an override
/// supplied at the end of the sequence win over base and variant tokens.
///
/// ```
/// use site_ui::class_list;
///
/// let compact = true;
/// let class = class_list(
///     ["ui-card", "ui-card--raised"]
///         .into_iter()
///         .chain(compact.then_some("ui-card--compact")),
/// );
/// assert_eq!(class, "ui-card ui-card--raised ui-card--compact");
/// ```
pub fn class_list<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    let tokens: Vec<&str> = tokens
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect();

    let mut resolved: Vec<&str> = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        if tokens[index + 1..].contains(token) {
            continue;
        }
        resolved.push(token);
    }
    resolved.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_tokens_in_input_order() {
        assert_eq!(
            class_list(["ui-button", "ui-button--primary", "ui-button--md"]),
            "ui-button ui-button--primary ui-button--md"
        );
    }

    #[test]
    fn splits_grouped_tokens_on_whitespace() {
        assert_eq!(
            class_list(["ui-button  ui-focus-ring", "ui-button--sm"]),
            "ui-button ui-focus-ring ui-button--sm"
        );
    }

    #[test]
    fn duplicate_tokens_keep_their_last_position() {
        assert_eq!(
            class_list(["ui-button", "ui-button--md", "ui-button"]),
            "ui-button--md ui-button"
        );
    }

    #[test]
    fn conditional_tokens_can_be_omitted() {
        let selected = false;
        assert_eq!(
            class_list(["ui-tab"].into_iter().chain(selected.then_some("ui-tab--selected"))),
            "ui-tab"
        );
    }

    #[test]
    fn empty_input_resolves_to_empty_string() {
        assert_eq!(class_list([]), "");
        assert_eq!(class_list(["   "]), "");
    }
}
