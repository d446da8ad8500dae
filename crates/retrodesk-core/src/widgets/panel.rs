use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cards::{Card, CardKind};
use super::errors::WidgetError;
use super::pascal::PascalBoard;
use super::{WidgetKind, bernoulli, collatz, euclidean, sequences};

/// A form interaction on a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum PanelAction {
    /// Generate button on a single-field form.
    Submit { input: String },
    /// Generate button on a two-field form.
    SubmitPair { first: String, second: String },
    Increment,
    Decrement,
    Generate,
    Reset,
}

impl PanelAction {
    pub fn name(&self) -> &'static str {
        match self {
            PanelAction::Submit { .. } => "submit",
            PanelAction::SubmitPair { .. } => "submit_pair",
            PanelAction::Increment => "increment",
            PanelAction::Decrement => "decrement",
            PanelAction::Generate => "generate",
            PanelAction::Reset => "reset",
        }
    }
}

/// Single input whose result field doubles as the validation message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPanel {
    pub input: String,
    pub result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollatzPanel {
    pub input: String,
    pub sequence: Vec<u64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EuclideanPanel {
    pub first: String,
    pub second: String,
    pub lines: Vec<String>,
    pub error: Option<String>,
}

/// What a renderer shows for a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelView {
    pub kind: WidgetKind,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PanelView {
    pub fn text(&self) -> String {
        match &self.error {
            Some(error) => error.clone(),
            None => self.lines.join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "widget")]
pub enum WidgetPanel {
    Fibonacci(TextPanel),
    Tribonacci(TextPanel),
    Bernoulli(TextPanel),
    Collatz(CollatzPanel),
    Pascal(PascalBoard),
    Euclidean(EuclideanPanel),
    Card(Card),
}

impl WidgetPanel {
    pub fn new(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Fibonacci => WidgetPanel::Fibonacci(TextPanel::default()),
            WidgetKind::Tribonacci => WidgetPanel::Tribonacci(TextPanel::default()),
            WidgetKind::Bernoulli => WidgetPanel::Bernoulli(TextPanel::default()),
            WidgetKind::Collatz => WidgetPanel::Collatz(CollatzPanel::default()),
            WidgetKind::Pascal => WidgetPanel::Pascal(PascalBoard::new()),
            WidgetKind::Euclidean => WidgetPanel::Euclidean(EuclideanPanel::default()),
            WidgetKind::Title => WidgetPanel::Card(Card::new(CardKind::Title)),
            WidgetKind::Authors => WidgetPanel::Card(Card::new(CardKind::Authors)),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetPanel::Fibonacci(_) => WidgetKind::Fibonacci,
            WidgetPanel::Tribonacci(_) => WidgetKind::Tribonacci,
            WidgetPanel::Bernoulli(_) => WidgetKind::Bernoulli,
            WidgetPanel::Collatz(_) => WidgetKind::Collatz,
            WidgetPanel::Pascal(_) => WidgetKind::Pascal,
            WidgetPanel::Euclidean(_) => WidgetKind::Euclidean,
            WidgetPanel::Card(card) => match card.kind {
                CardKind::Title => WidgetKind::Title,
                CardKind::Authors => WidgetKind::Authors,
            },
        }
    }

    /// Applies a form interaction.
    ///
    /// Invalid input is not an error: it lands in the panel's display.
    /// `Err` means the action does not exist on this panel. `Ok(false)` means
    /// the action was accepted but changed nothing (a clamped picker).
    pub fn apply(&mut self, action: PanelAction) -> Result<bool, WidgetError> {
        let kind = self.kind();

        let changed = match (self, action) {
            (WidgetPanel::Fibonacci(panel), PanelAction::Submit { input }) => {
                panel.result = match sequences::parse_term_count(&input) {
                    Ok(n) => sequences::join_terms(&sequences::fibonacci(n)),
                    Err(e) => rejected(kind, &input, e),
                };
                panel.input = input;
                true
            }
            (WidgetPanel::Tribonacci(panel), PanelAction::Submit { input }) => {
                panel.result = match sequences::parse_term_count(&input) {
                    Ok(n) => sequences::join_terms(&sequences::tribonacci(n)),
                    Err(e) => rejected(kind, &input, e),
                };
                panel.input = input;
                true
            }
            (WidgetPanel::Bernoulli(panel), PanelAction::Submit { input }) => {
                panel.result = match bernoulli::parse_count(&input) {
                    Ok(n) => bernoulli::display(&bernoulli::bernoulli(n)),
                    Err(e) => rejected(kind, &input, e),
                };
                panel.input = input;
                true
            }
            (WidgetPanel::Collatz(panel), PanelAction::Submit { input }) => {
                match collatz::parse_seed(&input) {
                    Ok(seed) => {
                        panel.sequence = collatz::collatz(seed);
                        panel.error = None;
                    }
                    Err(e) => {
                        panel.sequence.clear();
                        panel.error = Some(rejected(kind, &input, e));
                    }
                }
                panel.input = input;
                true
            }
            (WidgetPanel::Euclidean(panel), PanelAction::SubmitPair { first, second }) => {
                match euclidean::parse_operands(&first, &second) {
                    Ok((a, b)) => {
                        panel.lines = euclidean::display(a, b, &euclidean::euclidean(a, b));
                        panel.error = None;
                    }
                    Err(e) => {
                        panel.lines.clear();
                        panel.error = Some(rejected(kind, &first, e));
                    }
                }
                panel.first = first;
                panel.second = second;
                true
            }
            (WidgetPanel::Pascal(board), PanelAction::Increment) => board.increment(),
            (WidgetPanel::Pascal(board), PanelAction::Decrement) => board.decrement(),
            (WidgetPanel::Pascal(board), PanelAction::Generate) => board.generate(),
            (WidgetPanel::Pascal(board), PanelAction::Reset) => {
                board.reset();
                true
            }
            (_, action) => {
                return Err(WidgetError::UnsupportedAction {
                    widget: kind.key(),
                    action: action.name(),
                });
            }
        };

        Ok(changed)
    }

    pub fn view(&self) -> PanelView {
        let (lines, error) = match self {
            WidgetPanel::Fibonacci(panel)
            | WidgetPanel::Tribonacci(panel)
            | WidgetPanel::Bernoulli(panel) => (non_empty(&panel.result), None),
            WidgetPanel::Collatz(panel) => {
                let lines = if panel.sequence.is_empty() {
                    Vec::new()
                } else {
                    vec![
                        sequences::join_terms(&panel.sequence),
                        format!("Length: {}", panel.sequence.len()),
                    ]
                };
                (lines, panel.error.clone())
            }
            WidgetPanel::Euclidean(panel) => (panel.lines.clone(), panel.error.clone()),
            WidgetPanel::Pascal(board) => {
                let lines = if board.is_generated() {
                    board
                        .rows()
                        .iter()
                        .map(|row| {
                            row.iter()
                                .map(ToString::to_string)
                                .collect::<Vec<_>>()
                                .join(" ")
                        })
                        .collect()
                } else {
                    vec![format!("Height: {}", board.height())]
                };
                (lines, None)
            }
            WidgetPanel::Card(card) => (card.lines.clone(), None),
        };

        PanelView {
            kind: self.kind(),
            lines,
            error,
        }
    }
}

fn rejected(kind: WidgetKind, input: &str, error: WidgetError) -> String {
    debug!(event = "core.widget.input_rejected", widget = %kind, input = input);
    error.to_string()
}

fn non_empty(text: &str) -> Vec<String> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![text.to_string()]
    }
}
