//! Polymorphic button primitive.
//!
//! The button resolves three independent decisions per render: the class
//! token set for its emphasis/size axes, the element that hosts its
//! semantics (a native `<button>` wrapper or a caller-supplied slot
//! element), and whether a busy flag replaces the content and forces the
//! control non-interactive. All three decisions are pure functions of the
//! current props; the primitive owns no state.

use leptos::ev::MouseEvent;
use leptos::html::{AnyElement, HtmlElement};
use leptos::*;
use thiserror::Error;

use crate::{class_list, Icon, IconName, IconSize};

/// Class tokens shared by every button regardless of variant.
const BASE_CLASSES: &[&str] = &["ui-button", "ui-focus-ring"];

/// Shared button emphasis variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Standard action button.
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Accent/emphasized button.
    Accent,
    /// Danger/destructive button.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Accent => "accent",
            Self::Danger => "danger",
        }
    }

    /// Class tokens contributed by this variant, in composition order.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Self::Standard => &["ui-button--standard"],
            Self::Primary => &["ui-button--primary"],
            Self::Quiet => &["ui-button--quiet"],
            Self::Accent => &["ui-button--accent"],
            Self::Danger => &["ui-button--danger"],
        }
    }
}

/// Shared button sizing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Class tokens contributed by this size, in composition order.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Self::Sm => &["ui-button--sm"],
            Self::Md => &["ui-button--md"],
            Self::Lg => &["ui-button--lg"],
        }
    }
}

/// Resolves the full class attribute value for one button render.
///
/// Composition order is fixed: base tokens, variant tokens, size tokens,
/// then the caller override. [`class_list`] keeps the last occurrence of a
/// repeated token, so override tokens win ties against the variant and
/// size tables.
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    override_class: Option<&str>,
) -> String {
    class_list(
        BASE_CLASSES
            .iter()
            .copied()
            .chain(variant.classes().iter().copied())
            .chain(size.classes().iter().copied())
            .chain(override_class.unwrap_or_default().split_whitespace()),
    )
}

/// Content contract violations raised when the button is given an invalid
/// combination of children and slot element.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    /// Both children and an `as_child` slot element were supplied.
    #[error("an `as_child` slot element must be the button's only content")]
    ConflictingContent,
    /// Neither children nor an `as_child` slot element were supplied.
    #[error("supply children or an `as_child` slot element to render")]
    MissingContent,
}

/// Tagged choice between the two render strategies, carrying the content
/// payload the chosen strategy consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderPlan<S, C> {
    /// Render a native `<button>` wrapper around the caller's children.
    Wrapper(C),
    /// Merge button semantics onto the caller-supplied slot element.
    Passthrough(S),
}

/// Chooses a render strategy from the supplied content sources.
///
/// Exactly one source must be present. The slot type already guarantees a
/// single hosting element, so the only representable violations are zero
/// sources and two sources; both surface as a [`SlotError`] instead of an
/// attribute merge onto the wrong number of nodes.
pub(crate) fn resolve_plan<S, C>(
    slot: Option<S>,
    children: Option<C>,
) -> Result<RenderPlan<S, C>, SlotError> {
    match (slot, children) {
        (Some(slot), None) => Ok(RenderPlan::Passthrough(slot)),
        (None, Some(children)) => Ok(RenderPlan::Wrapper(children)),
        (Some(_), Some(_)) => Err(SlotError::ConflictingContent),
        (None, None) => Err(SlotError::MissingContent),
    }
}

/// Content the button shows for the current busy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonContent {
    /// The fixed busy indicator glyph.
    BusyIndicator,
    /// The caller's children, unchanged.
    Children,
}

pub(crate) fn resolve_content(busy: bool) -> ButtonContent {
    if busy {
        ButtonContent::BusyIndicator
    } else {
        ButtonContent::Children
    }
}

/// Busy always wins over the caller-supplied disabled value.
pub(crate) fn resolve_disabled(busy: bool, disabled: bool) -> bool {
    busy || disabled
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// The attribute bundle attached to whichever element wins the strategy
/// branch. Built once per render so both strategies merge identically.
struct ButtonBundle {
    class: String,
    variant: ButtonVariant,
    size: ButtonSize,
    busy: Signal<bool>,
    is_disabled: Signal<bool>,
    node_ref: NodeRef<AnyElement>,
    attrs: Vec<(&'static str, Attribute)>,
    on_click: Option<Callback<MouseEvent>>,
}

fn apply_bundle(el: HtmlElement<AnyElement>, bundle: ButtonBundle) -> HtmlElement<AnyElement> {
    let ButtonBundle {
        class,
        variant,
        size,
        busy,
        is_disabled,
        node_ref,
        attrs,
        on_click,
    } = bundle;

    let el = el
        .attrs(attrs)
        .classes(class)
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "button")
        .attr("data-ui-variant", variant.token())
        .attr("data-ui-size", size.token())
        .attr("data-ui-busy", move || bool_token(busy.get()))
        .attr("data-ui-disabled", move || bool_token(is_disabled.get()))
        .attr("aria-busy", move || bool_token(busy.get()))
        .attr("aria-disabled", move || bool_token(is_disabled.get()))
        .attr("disabled", move || is_disabled.get())
        .node_ref(node_ref);

    match on_click {
        // Slot hosts such as anchors have no native disabled semantics, so
        // the guard also runs where the attribute alone would not stop
        // activation.
        Some(on_click) => el.on(ev::click, move |ev| {
            if is_disabled.get_untracked() {
                return;
            }
            on_click.call(ev);
        }),
        None => el,
    }
}

#[component]
/// Shared polymorphic button primitive.
///
/// Renders a native `<button>` around `children` by default. When
/// `as_child` supplies a slot element the primitive renders no wrapper and
/// merges its class tokens, busy/disabled condition, reference handle, and
/// forwarded attributes onto that element instead. A truthy `busy` swaps
/// the wrapper content for the spinner glyph and forces the control
/// non-interactive regardless of `disabled`.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    /// Free-form class override appended after the variant and size tokens.
    #[prop(optional)]
    class: Option<&'static str>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Reference handle attached to whichever element is interactive.
    #[prop(optional)]
    node_ref: NodeRef<AnyElement>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Slot element that hosts the button semantics instead of a wrapper.
    #[prop(optional)]
    as_child: Option<HtmlElement<AnyElement>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let busy = Signal::derive(move || busy.get());
    let is_disabled = Signal::derive(move || resolve_disabled(busy.get(), disabled.get()));

    let bundle = ButtonBundle {
        class: button_class(variant, size, class),
        variant,
        size,
        busy,
        is_disabled,
        node_ref,
        attrs,
        on_click,
    };

    let plan = match resolve_plan(as_child, children) {
        Ok(plan) => plan,
        Err(err) => panic!("button content contract: {err}"),
    };

    match plan {
        RenderPlan::Wrapper(children) => {
            let el = html::button().attr("type", "button").into_any();
            apply_bundle(el, bundle)
                .child(move || match resolve_content(busy.get()) {
                    ButtonContent::BusyIndicator => {
                        view! { <Icon icon=IconName::Busy size=IconSize::Sm /> }.into_view()
                    }
                    ButtonContent::Children => children().into_view(),
                })
                .into_view()
        }
        RenderPlan::Passthrough(slot) => apply_bundle(slot, bundle).into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_resolution_is_deterministic() {
        let first = button_class(ButtonVariant::Primary, ButtonSize::Lg, Some("route-cta"));
        let second = button_class(ButtonVariant::Primary, ButtonSize::Lg, Some("route-cta"));
        assert_eq!(first, second);
    }

    #[test]
    fn primary_with_default_size_composes_in_order() {
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Md, None),
            "ui-button ui-focus-ring ui-button--primary ui-button--md"
        );
    }

    #[test]
    fn omitted_options_equal_their_declared_defaults() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), None),
            button_class(ButtonVariant::Standard, ButtonSize::Md, None)
        );
    }

    #[test]
    fn override_tokens_resolve_last() {
        let class = button_class(ButtonVariant::Quiet, ButtonSize::Sm, Some("route-cta wide"));
        assert!(class.ends_with("route-cta wide"));
    }

    #[test]
    fn override_duplicates_keep_the_override_position() {
        assert_eq!(
            button_class(ButtonVariant::Standard, ButtonSize::Md, Some("ui-button--md")),
            "ui-button ui-focus-ring ui-button--standard ui-button--md"
        );
        // A repeated base token keeps the override position, not the base one.
        assert_eq!(
            button_class(ButtonVariant::Standard, ButtonSize::Md, Some("ui-button")),
            "ui-focus-ring ui-button--standard ui-button--md ui-button"
        );
    }

    #[test]
    fn every_variant_and_size_maps_to_tokens() {
        let variants = [
            ButtonVariant::Standard,
            ButtonVariant::Primary,
            ButtonVariant::Quiet,
            ButtonVariant::Accent,
            ButtonVariant::Danger,
        ];
        for variant in variants {
            assert!(!variant.classes().is_empty(), "{} variant has no tokens", variant.token());
        }
        for size in [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg] {
            assert!(!size.classes().is_empty(), "{} size has no tokens", size.token());
        }
    }

    #[test]
    fn busy_forces_disabled_over_caller_value() {
        assert!(resolve_disabled(true, false));
        assert!(resolve_disabled(true, true));
        assert!(!resolve_disabled(false, false));
        assert!(resolve_disabled(false, true));
    }

    #[test]
    fn busy_selects_the_indicator_content() {
        assert_eq!(resolve_content(true), ButtonContent::BusyIndicator);
        assert_eq!(resolve_content(false), ButtonContent::Children);
    }

    #[test]
    fn plan_picks_the_strategy_for_the_supplied_source() {
        assert_eq!(
            resolve_plan::<&str, &str>(None, Some("children")),
            Ok(RenderPlan::Wrapper("children"))
        );
        assert_eq!(
            resolve_plan::<&str, &str>(Some("slot"), None),
            Ok(RenderPlan::Passthrough("slot"))
        );
    }

    #[test]
    fn plan_rejects_missing_and_conflicting_content() {
        assert_eq!(
            resolve_plan::<&str, &str>(None, None),
            Err(SlotError::MissingContent)
        );
        assert_eq!(
            resolve_plan::<&str, &str>(Some("slot"), Some("children")),
            Err(SlotError::ConflictingContent)
        );
    }
}
