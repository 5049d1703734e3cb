use super::*;

/// Canned inputs offered next to the text box, in display order.
pub const EXAMPLES: [&str; 3] = [
    "I loved this product, it exceeded my expectations!",
    "Terrible experience, would not recommend to anyone.",
    "Average item — does the job but nothing special.",
];

impl AnalyzerController {
    /// Replace the text with `EXAMPLES[index]` and clear any shown result.
    pub fn select_example(&mut self, index: usize) {
        let Some(example) = EXAMPLES.get(index) else {
            return;
        };
        self.ui.analyzer.text = (*example).to_string();
        self.ui.analyzer.outcome = None;
        self.ui.analyzer.focus_input_requested = true;
        self.jobs.mark_prediction_stale();
    }
}
