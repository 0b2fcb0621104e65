//! Icon rendering passthrough
//!
//! Embedding UIs supply an [`IconRenderer`] for their toolkit. A missing icon
//! renders nothing rather than failing.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ChevronLeft,
    ChevronRight,
    Calendar,
    Card,
    Grid,
    List,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconProps {
    pub size: f32,
    pub active: bool,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            size: 20.0,
            active: false,
        }
    }
}

pub trait IconRenderer {
    type Output;

    fn render(&self, icon: Icon, props: &IconProps) -> Self::Output;
}

/// Renders `icon` when present; a missing icon is a silent no-op.
pub fn render_icon<R: IconRenderer + ?Sized>(
    renderer: &R,
    icon: Option<Icon>,
    props: &IconProps,
) -> Option<R::Output> {
    icon.map(|icon| renderer.render(icon, props))
}

/// Renders icons as their name, for logs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct IconName;

impl IconRenderer for IconName {
    type Output = &'static str;

    fn render(&self, icon: Icon, _props: &IconProps) -> Self::Output {
        match icon {
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
            Icon::Calendar => "calendar",
            Icon::Card => "square",
            Icon::Grid => "grid",
            Icon::List => "list",
            Icon::Close => "x",
        }
    }
}
