use pagecraft_model::{Breakpoint, ComponentId, TreeView};

/// Editing renders carry edit frames, placeholders and click bindings;
/// static renders are what a visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Editing,
    Static,
}

/// Caller-facing knobs for a render
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub selected: Option<ComponentId>,
    /// Simulated viewport; `None` renders for every breakpoint at once
    pub breakpoint: Option<Breakpoint>,
}

impl RenderOptions {
    pub fn editing() -> Self {
        Self {
            mode: RenderMode::Editing,
            ..Self::default()
        }
    }

    pub fn static_page() -> Self {
        Self {
            mode: RenderMode::Static,
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, selected: Option<ComponentId>) -> Self {
        self.selected = selected;
        self
    }

    pub fn at_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = Some(breakpoint);
        self
    }
}

/// Everything a component renderer can see besides its own component
pub struct RenderContext<'a> {
    pub mode: RenderMode,
    pub tree: &'a TreeView<'a>,
    pub selected: Option<&'a ComponentId>,
    pub breakpoint: Option<Breakpoint>,
}

impl<'a> RenderContext<'a> {
    pub fn new(tree: &'a TreeView<'a>, options: &'a RenderOptions) -> Self {
        Self {
            mode: options.mode,
            tree,
            selected: options.selected.as_ref(),
            breakpoint: options.breakpoint,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RenderMode::Editing
    }

    pub fn is_selected(&self, id: &ComponentId) -> bool {
        self.selected == Some(id)
    }
}
