/// A clickable tab link pointing at a panel id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabLink {
    pub label: String,
    pub target: String,
    pub active: bool,
}

/// A tab panel and its visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabPanel {
    pub id: String,
    pub visible: bool,
}

/// Tab links plus the panels they switch between.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabSet {
    pub links: Vec<TabLink>,
    pub panels: Vec<TabPanel>,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a panel with a link of the same target. Nothing is shown until a
    /// tab is opened.
    pub fn with_tab(mut self, id: &str, label: &str) -> Self {
        self.links.push(TabLink {
            label: label.to_string(),
            target: id.to_string(),
            active: false,
        });
        self.panels.push(TabPanel {
            id: id.to_string(),
            visible: false,
        });
        self
    }

    /// Activate the link at `link_index`: hide every panel, clear every
    /// active marker, then show the target panel (if one matches) and mark
    /// the clicked link.
    pub fn open(&mut self, link_index: usize) {
        let Some(target) = self.links.get(link_index).map(|l| l.target.clone()) else {
            tracing::warn!(link_index, "no such tab link");
            return;
        };
        tracing::debug!(%target, "opening tab");

        for panel in &mut self.panels {
            panel.visible = false;
        }
        for link in &mut self.links {
            link.active = false;
        }
        if let Some(panel) = self.panels.iter_mut().find(|p| p.id == target) {
            panel.visible = true;
        }
        self.links[link_index].active = true;
    }

    /// Open the first link targeting `id`.
    pub fn open_target(&mut self, id: &str) {
        if let Some(index) = self.links.iter().position(|l| l.target == id) {
            self.open(index);
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.panels.iter().any(|p| p.id == id && p.visible)
    }

    pub fn active_link(&self) -> Option<&TabLink> {
        self.links.iter().find(|l| l.active)
    }
}
