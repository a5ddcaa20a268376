// extensions/stagger.rs
//
// Staggered reveal-on-scroll plan for the page's static sections.
// Computes per-node motion and delay; the host applies them as CSS variables
// and flips the `inview` class when a node intersects the viewport.

/// Easing curve handed to CSS for each node's reveal transition.
pub const REVEAL_EASE: &str = "cubic-bezier(0.30, 0.00, 0.20, 1.00)";

/// Intersection ratio at which a node counts as visible.
pub const REVEAL_THRESHOLD: f64 = 0.18;

/// Observer root margin: trigger slightly before the node clears the fold.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

/// Horizontal travel pattern for a section's nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Travel {
    /// Nodes alternate sides with a modest offset.
    #[default]
    Alternating,
    /// The first two nodes alternate; the rest fly in from opposite lanes.
    Split,
}

/// A page section and the selectors whose nodes reveal in order.
#[derive(Debug, Clone, Copy)]
pub struct SectionDef {
    pub id: &'static str,
    pub selectors: &'static [&'static str],
    pub travel: Travel,
}

/// Sections of the marketing page, top to bottom.
pub const SECTIONS: &[SectionDef] = &[
    SectionDef {
        id: "artifacts",
        selectors: &[".sectionTitle", ".sectionLede", ".cards .card", ".anchorLine"],
        travel: Travel::Alternating,
    },
    SectionDef {
        id: "gap",
        selectors: &[".kicker", ".gap__stack .gapLine", ".slackToast", ".anchorLine"],
        travel: Travel::Alternating,
    },
    SectionDef {
        id: "shift-zone",
        selectors: &[".shift__center"],
        travel: Travel::Alternating,
    },
    SectionDef {
        id: "ai-proof",
        selectors: &[
            ".sectionHead > div:first-child",
            ".sectionHead .pillNote",
            ".split .legacyLane",
            ".split .protoLab",
        ],
        travel: Travel::Split,
    },
    SectionDef {
        id: "value",
        selectors: &[".sectionTitle", ".sectionLede", ".valueGrid .valueCard"],
        travel: Travel::Alternating,
    },
    SectionDef {
        id: "closing",
        selectors: &[".closing__title", ".closing__lede", ".closing__ctaRow", ".fineprint"],
        travel: Travel::Alternating,
    },
];

/// Entry motion for one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMotion {
    pub travel_x: f32,
    pub travel_y: f32,
    pub scale: f32,
    pub duration_ms: u32,
}

impl RevealMotion {
    /// Motion for the node at `index` within the section `section_id`.
    pub fn for_node(section_id: &str, index: usize, travel: Travel) -> Self {
        let section_sign = if section_id.chars().count() % 2 == 0 { 1.0 } else { -1.0 };
        let pair_sign = if index % 2 == 0 { 1.0 } else { -1.0 };
        let travel_x = if travel == Travel::Split && index >= 2 {
            140.0 * pair_sign
        } else {
            62.0 * section_sign * pair_sign
        };

        Self {
            travel_x,
            travel_y: 54.0 - index.min(3) as f32 * 6.0,
            scale: if index % 3 == 0 { 0.94 } else { 0.96 },
            duration_ms: 860 + (index % 2) as u32 * 90,
        }
    }

    pub fn css_properties(&self) -> [(&'static str, String); 5] {
        [
            ("--rx", format!("{}px", self.travel_x)),
            ("--ry", format!("{}px", self.travel_y)),
            ("--rs", format!("{:.2}", self.scale)),
            ("--reveal-duration", format!("{}ms", self.duration_ms)),
            ("--reveal-ease", REVEAL_EASE.to_string()),
        ]
    }
}

/// A revealable node's document position and its index within its section.
#[derive(Debug, Clone, Copy)]
pub struct PlacedNode {
    pub top: f32,
    pub index: usize,
}

/// Reveal delay in ms for each node, in input order.
///
/// Nodes further down the page wait longer (30–450 ms across the page's
/// vertical span) plus a small per-index micro stagger capped at 140 ms.
pub fn reveal_delays(nodes: &[PlacedNode]) -> Vec<u32> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let min_top = nodes.iter().map(|n| n.top).fold(f32::INFINITY, f32::min);
    let max_top = nodes.iter().map(|n| n.top).fold(f32::NEG_INFINITY, f32::max);
    let span = (max_top - min_top).max(1.0);

    nodes
        .iter()
        .map(|node| {
            let y_norm = (node.top - min_top) / span;
            let y_delay = (30.0 + y_norm * 420.0).round() as u32;
            let micro = (node.index as u32 * 26).min(140);
            y_delay + micro
        })
        .collect()
}
