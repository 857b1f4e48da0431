//! Collapsible table sections
//!
//! A [`Section`] owns the detail rows of one toggle and decides what happens
//! to them on open and close. Transitions return [`SectionEffect`]s that the
//! caller applies to the DOM, so the logic is testable without a browser.

/// Visibility of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    #[default]
    Collapsed,
    Expanded,
}

/// Side effect requested by a transition. `usize` values index the
/// section's detail list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEffect {
    Show(usize),
    Hide(usize),
    /// Fetch and draw the chart of a detail row. The load must be dropped if
    /// [`Section::accepts`] rejects `generation` by the time it completes.
    LoadChart { detail: usize, generation: u64 },
    /// Remove every rendered chart canvas from a detail row
    RemoveCharts(usize),
}

impl SectionEffect {
    /// Detail row the effect applies to
    pub fn detail_index(&self) -> usize {
        match *self {
            SectionEffect::Show(i) | SectionEffect::Hide(i) | SectionEffect::RemoveCharts(i) => i,
            SectionEffect::LoadChart { detail, .. } => detail,
        }
    }
}

#[derive(Debug, Clone)]
struct Detail<D> {
    handle: D,
    has_chart: bool,
}

/// A toggle and the detail rows it controls
#[derive(Debug, Clone)]
pub struct Section<D> {
    name: String,
    state: SectionState,
    details: Vec<Detail<D>>,
    generation: u64,
}

impl<D> Section<D> {
    /// `details` yields each detail row with whether it holds a chart placeholder
    pub fn new(name: impl Into<String>, details: impl IntoIterator<Item = (D, bool)>) -> Self {
        Self {
            name: name.into(),
            state: SectionState::Collapsed,
            details: details
                .into_iter()
                .map(|(handle, has_chart)| Detail { handle, has_chart })
                .collect(),
            generation: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn detail(&self, index: usize) -> Option<&D> {
        self.details.get(index).map(|d| &d.handle)
    }

    /// Effects that put a freshly built section into its collapsed look
    pub fn initial_effects(&self) -> Vec<SectionEffect> {
        (0..self.details.len()).map(SectionEffect::Hide).collect()
    }

    /// Move to the state reported by the toggle control.
    ///
    /// Reporting the current state again yields no effects.
    pub fn set_open(&mut self, open: bool) -> Vec<SectionEffect> {
        let target = if open {
            SectionState::Expanded
        } else {
            SectionState::Collapsed
        };
        if target == self.state {
            return Vec::new();
        }

        self.state = target;
        self.generation += 1;
        let generation = self.generation;

        let mut effects = Vec::new();
        for (i, detail) in self.details.iter().enumerate() {
            match target {
                SectionState::Expanded => {
                    effects.push(SectionEffect::Show(i));
                    if detail.has_chart {
                        effects.push(SectionEffect::LoadChart {
                            detail: i,
                            generation,
                        });
                    }
                }
                SectionState::Collapsed => {
                    effects.push(SectionEffect::Hide(i));
                    if detail.has_chart {
                        effects.push(SectionEffect::RemoveCharts(i));
                    }
                }
            }
        }

        tracing::debug!(section = %self.name, state = ?self.state, "section toggled");
        effects
    }

    /// Whether a chart load started at `generation` may still be drawn
    pub fn accepts(&self, generation: u64) -> bool {
        self.state == SectionState::Expanded && self.generation == generation
    }
}
