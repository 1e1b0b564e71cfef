/// Tab identifiers for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Efficiency,
    Profit,
    Surface,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Efficiency, TabId::Profit, TabId::Surface];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Efficiency => "Efficiency Map",
            TabId::Profit => "Profit Surface",
            TabId::Surface => "Interactive 3D",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Efficiency => 0,
            TabId::Profit => 1,
            TabId::Surface => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Efficiency),
            1 => Some(TabId::Profit),
            2 => Some(TabId::Surface),
            _ => None,
        }
    }
}
