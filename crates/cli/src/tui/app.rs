//! Application state and update logic following The Elm Architecture.

use taskgraph_core::index::{SearchEngine, SearchHit, TaskNode};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Enter was pressed.
    Success,
    /// Ctrl-C was pressed.
    Interrupted,
}

/// Where the session loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Blocked on the next terminal event.
    AwaitingInput,
    /// State changed; the screen must be redrawn.
    Rendering,
    /// The loop ends with this outcome.
    Exiting(Outcome),
}

/// Messages that drive state updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Append(char),
    Backspace,
    Submit,
    Interrupt,
    Redraw,
}

/// Main application state.
pub struct App<'a> {
    pub phase: Phase,

    /// Query typed so far.
    pub query: String,

    /// Ranked hits for `query`.
    pub hits: Vec<SearchHit<'a>>,

    /// Number of nodes being searched.
    pub total: usize,

    engine: SearchEngine<'a>,
    limit: usize,
}

impl<'a> App<'a> {
    pub fn new(nodes: &'a [TaskNode], limit: usize, query: String) -> Self {
        let mut app = App {
            phase: Phase::Rendering,
            query,
            hits: Vec::new(),
            total: nodes.len(),
            engine: SearchEngine::new(nodes),
            limit,
        };
        app.rerank();
        app
    }

    /// Process a message and update state.
    pub fn update(&mut self, msg: Message) {
        if matches!(self.phase, Phase::Exiting(_)) {
            return;
        }

        match msg {
            Message::Append(c) => {
                self.query.push(c);
                self.rerank();
                self.phase = Phase::Rendering;
            }
            Message::Backspace => {
                self.query.pop();
                self.rerank();
                self.phase = Phase::Rendering;
            }
            Message::Submit => self.phase = Phase::Exiting(Outcome::Success),
            Message::Interrupt => self.phase = Phase::Exiting(Outcome::Interrupted),
            Message::Redraw => self.phase = Phase::Rendering,
        }
    }

    /// The current frame has been drawn.
    pub fn rendered(&mut self) {
        if self.phase == Phase::Rendering {
            self.phase = Phase::AwaitingInput;
        }
    }

    fn rerank(&mut self) {
        self.hits = self.engine.search(&self.query, self.limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskgraph_core::index::index_markdown;

    fn nodes() -> Vec<TaskNode> {
        index_markdown(
            "# Alpha\n- [ ] Deploy staging\n- [x] Deploy production\n- [ ] Write docs\n",
            "alpha.md",
        )
    }

    fn titles<'a>(app: &App<'a>) -> Vec<&'a str> {
        app.hits.iter().map(|h| h.node.title.as_str()).collect()
    }

    fn type_str(app: &mut App<'_>, s: &str) {
        for c in s.chars() {
            app.update(Message::Append(c));
        }
    }

    #[test]
    fn starts_by_rendering_an_empty_query() {
        let nodes = nodes();
        let app = App::new(&nodes, 10, String::new());
        assert_eq!(app.phase, Phase::Rendering);
        assert!(app.query.is_empty());
        assert!(app.hits.is_empty());
        assert_eq!(app.total, 5);
    }

    #[test]
    fn seed_query_is_ranked_immediately() {
        let nodes = nodes();
        let app = App::new(&nodes, 10, "docs".to_string());
        assert_eq!(titles(&app), vec!["Write docs"]);
    }

    #[test]
    fn append_extends_buffer_and_reranks() {
        let nodes = nodes();
        let mut app = App::new(&nodes, 10, String::new());
        app.rendered();
        assert_eq!(app.phase, Phase::AwaitingInput);

        type_str(&mut app, "deploy");
        assert_eq!(app.query, "deploy");
        assert_eq!(app.phase, Phase::Rendering);
        assert_eq!(titles(&app), vec!["Deploy staging", "Deploy production"]);

        type_str(&mut app, " staging");
        assert_eq!(titles(&app)[0], "Deploy staging");
    }

    #[test]
    fn backspace_pops_and_reranks() {
        let nodes = nodes();
        let mut app = App::new(&nodes, 10, "docsx".to_string());
        assert!(app.hits.is_empty());

        app.update(Message::Backspace);
        assert_eq!(app.query, "docs");
        assert_eq!(titles(&app), vec!["Write docs"]);
    }

    #[test]
    fn backspace_on_empty_buffer_is_harmless() {
        let nodes = nodes();
        let mut app = App::new(&nodes, 10, String::new());
        app.update(Message::Backspace);
        assert!(app.query.is_empty());
        assert!(app.hits.is_empty());
        assert_eq!(app.phase, Phase::Rendering);
    }

    #[test]
    fn limit_applies_to_interactive_results() {
        let nodes = nodes();
        let app = App::new(&nodes, 1, "deploy".to_string());
        assert_eq!(app.hits.len(), 1);
    }

    #[test]
    fn enter_exits_with_success() {
        let nodes = nodes();
        let mut app = App::new(&nodes, 10, String::new());
        app.update(Message::Submit);
        assert_eq!(app.phase, Phase::Exiting(Outcome::Success));
    }

    #[test]
    fn ctrl_c_exits_with_failure() {
        let nodes = nodes();
        let mut app = App::new(&nodes, 10, "deploy".to_string());
        app.update(Message::Interrupt);
        assert_eq!(app.phase, Phase::Exiting(Outcome::Interrupted));
    }

    #[test]
    fn exiting_is_final() {
        let nodes = nodes();
        let mut app = App::new(&nodes, 10, String::new());
        app.update(Message::Interrupt);
        app.update(Message::Append('a'));
        app.update(Message::Submit);
        app.rendered();
        assert_eq!(app.phase, Phase::Exiting(Outcome::Interrupted));
        assert!(app.query.is_empty());
    }

    #[test]
    fn redraw_returns_to_rendering() {
        let nodes = nodes();
        let mut app = App::new(&nodes, 10, String::new());
        app.rendered();
        app.update(Message::Redraw);
        assert_eq!(app.phase, Phase::Rendering);
    }
}
