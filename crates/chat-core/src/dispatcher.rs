//! Query Dispatcher
//!
//! Runs one submission end to end:
//!
//! ```text
//! Idle ──submit──► Sending (indicator shown) ──► Success ─┐
//!                                            └─► Failure ─┴─► Idle (indicator hidden)
//! ```
//!
//! Submissions share nothing but the view. Two overlapping submissions send
//! two requests; each completion hides the indicator on its own, so while
//! requests overlap the indicator may disappear before the last answer lands.

use std::rc::Rc;

use crate::client::QueryClient;
use crate::config::WidgetConfig;
use crate::message::Role;
use crate::renderer::MessageRenderer;
use crate::view::ChatView;

/// Whitespace as browsers trim it: Unicode whitespace plus the byte order
/// mark, which `char::is_whitespace` does not cover
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// How a submission ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Input was empty or whitespace; nothing happened
    Ignored,
    /// Backend answered; bot message rendered
    Answered,
    /// Request failed; fallback message rendered
    Failed,
}

/// Form-submit handler logic over an injected view and client
pub struct QueryDispatcher<V: ?Sized, C> {
    view: Rc<V>,
    renderer: MessageRenderer<V>,
    client: C,
    fallback_message: String,
}

impl<V, C> QueryDispatcher<V, C>
where
    V: ChatView + ?Sized,
    C: QueryClient,
{
    pub fn new(view: Rc<V>, client: C, config: &WidgetConfig) -> Self {
        Self {
            renderer: MessageRenderer::new(Rc::clone(&view), config.clock),
            view,
            client,
            fallback_message: config.fallback_message.clone(),
        }
    }

    /// Handle one form submission.
    ///
    /// Everything up to the request happens synchronously on the first poll:
    /// the input is cleared, the question rendered and the indicator shown
    /// before the client is called.
    pub async fn submit(&self) -> Submission {
        let question = self.view.input_value().trim_matches(is_blank).to_owned();
        if question.is_empty() {
            return Submission::Ignored;
        }

        self.view.clear_input();
        self.renderer.render(Role::User, question.as_str(), None);

        self.view.set_typing(true);
        self.view.scroll_to_bottom();

        match self.client.query(&question).await {
            Ok(response) => {
                self.view.set_typing(false);
                self.renderer
                    .render(Role::Bot, response.answer, response.category.as_deref());
                Submission::Answered
            }
            Err(e) => {
                self.view.set_typing(false);
                tracing::error!(error = %e, kind = e.kind(), "query failed");
                self.renderer
                    .render(Role::Bot, self.fallback_message.as_str(), None);
                Submission::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::error::{ChatError, Result, FALLBACK_MESSAGE};
    use crate::view::{MemoryView, ViewEvent};
    use crate::wire::QueryResponse;

    fn answer(text: &str, category: Option<&str>) -> QueryResponse {
        QueryResponse {
            question: None,
            category: category.map(str::to_owned),
            answer: text.into(),
        }
    }

    /// Replays canned results and notes how many log entries existed when
    /// each request went out.
    struct ScriptedClient {
        view: Rc<MemoryView>,
        replies: RefCell<VecDeque<Result<QueryResponse>>>,
        calls: RefCell<Vec<(String, usize)>>,
    }

    impl ScriptedClient {
        fn new(view: Rc<MemoryView>, replies: Vec<Result<QueryResponse>>) -> Rc<Self> {
            Rc::new(Self {
                view,
                replies: RefCell::new(replies.into()),
                calls: RefCell::new(Vec::new()),
            })
        }
    }

    #[async_trait(?Send)]
    impl QueryClient for ScriptedClient {
        async fn query(&self, question: &str) -> Result<QueryResponse> {
            self.calls
                .borrow_mut()
                .push((question.to_owned(), self.view.len()));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ChatError::Transport("no reply scripted".into())))
        }
    }

    /// Holds each request open until the test releases it
    #[derive(Default)]
    struct GatedClient {
        gates: RefCell<HashMap<String, oneshot::Receiver<Result<QueryResponse>>>>,
    }

    impl GatedClient {
        fn gate(&self, question: &str) -> oneshot::Sender<Result<QueryResponse>> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().insert(question.to_owned(), rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl QueryClient for GatedClient {
        async fn query(&self, question: &str) -> Result<QueryResponse> {
            let rx = self
                .gates
                .borrow_mut()
                .remove(question)
                .ok_or_else(|| ChatError::Transport(format!("no gate for {question}")))?;
            rx.await
                .unwrap_or_else(|_| Err(ChatError::Transport("gate dropped".into())))
        }
    }

    fn setup(
        replies: Vec<Result<QueryResponse>>,
    ) -> (
        Rc<MemoryView>,
        Rc<ScriptedClient>,
        QueryDispatcher<MemoryView, Rc<ScriptedClient>>,
    ) {
        let view = Rc::new(MemoryView::new());
        let client = ScriptedClient::new(view.clone(), replies);
        let dispatcher =
            QueryDispatcher::new(view.clone(), client.clone(), &WidgetConfig::default());
        (view, client, dispatcher)
    }

    #[tokio::test]
    async fn test_success_with_category() {
        let (view, client, dispatcher) =
            setup(vec![Ok(answer("Paris is the capital.", Some("geography")))]);
        view.type_input("  What is the capital of France?  ");

        assert_eq!(dispatcher.submit().await, Submission::Answered);

        let messages = view.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].text, "What is the capital of France?");
        assert_eq!(messages[0].category(), None);
        assert_eq!(messages[1].role, Role::Bot);
        assert_eq!(messages[1].text, "Paris is the capital.");
        assert_eq!(messages[1].category(), Some("geography"));

        assert!(!view.is_typing());
        assert!(view.is_scrolled_to_bottom());
        assert_eq!(view.input(), "");

        // Question went out trimmed, after the user message was on screen
        let calls = client.calls.borrow();
        assert_eq!(calls.as_slice(), [("What is the capital of France?".to_owned(), 1)]);
    }

    #[tokio::test]
    async fn test_success_without_category_has_no_tag() {
        let (view, _client, dispatcher) = setup(vec![Ok(answer("4", None))]);
        view.type_input("What is 2+2?");

        dispatcher.submit().await;

        let bot = &view.messages()[1];
        assert_eq!(bot.text, "4");
        assert_eq!(bot.category, None);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        for input in ["", "   ", "\n\t  ", "\u{FEFF}", " \u{FEFF}\u{00A0}\n"] {
            let (view, client, dispatcher) = setup(vec![]);
            view.type_input(input);

            assert_eq!(dispatcher.submit().await, Submission::Ignored);
            assert!(view.is_empty());
            assert!(view.events().is_empty());
            assert!(client.calls.borrow().is_empty());
        }
    }

    #[tokio::test]
    async fn test_byte_order_mark_is_trimmed_from_question() {
        let (view, client, dispatcher) = setup(vec![Ok(answer("ok", None))]);
        view.type_input("\u{FEFF}What is 2+2? \u{FEFF}");

        assert_eq!(dispatcher.submit().await, Submission::Answered);
        assert_eq!(view.messages()[0].text, "What is 2+2?");
        assert_eq!(client.calls.borrow()[0].0, "What is 2+2?");
    }

    #[tokio::test]
    async fn test_failures_render_fallback() {
        let failures = vec![
            ChatError::Transport("connection refused".into()),
            ChatError::Status { status: 500, body: "{\"error\":\"boom\"}".into() },
            ChatError::Decode("expected value at line 1".into()),
        ];

        for failure in failures {
            let (view, _client, dispatcher) = setup(vec![Err(failure)]);
            view.type_input("What is 2+2?");

            assert_eq!(dispatcher.submit().await, Submission::Failed);

            let messages = view.messages();
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[1].role, Role::Bot);
            assert_eq!(messages[1].text, FALLBACK_MESSAGE);
            assert_eq!(messages[1].category(), None);
            assert!(!view.is_typing());
        }
    }

    #[tokio::test]
    async fn test_log_stays_usable_after_failure() {
        let (view, _client, dispatcher) = setup(vec![
            Err(ChatError::Transport("offline".into())),
            Ok(answer("Back online.", Some("general"))),
        ]);

        view.type_input("first");
        dispatcher.submit().await;
        view.type_input("second");
        assert_eq!(dispatcher.submit().await, Submission::Answered);

        let texts: Vec<_> = view.messages().into_iter().map(|m| m.text).collect();
        assert_eq!(texts, ["first", FALLBACK_MESSAGE, "second", "Back online."]);
    }

    #[tokio::test]
    async fn test_event_sequence() {
        let (view, _client, dispatcher) = setup(vec![Ok(answer("ok", None))]);
        view.type_input("ping");

        dispatcher.submit().await;

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::InputCleared,
                ViewEvent::Appended(Role::User),
                ViewEvent::Scrolled,
                ViewEvent::Typing(true),
                ViewEvent::Scrolled,
                ViewEvent::Typing(false),
                ViewEvent::Appended(Role::Bot),
                ViewEvent::Scrolled,
            ]
        );
    }

    #[tokio::test]
    async fn test_input_cleared_before_response() {
        let view = Rc::new(MemoryView::new());
        let client = GatedClient::default();
        let release = client.gate("slow question");
        let dispatcher = QueryDispatcher::new(view.clone(), client, &WidgetConfig::default());

        view.type_input("slow question");
        let pending = dispatcher.submit();
        tokio::pin!(pending);
        assert!(futures::poll!(&mut pending).is_pending());

        assert_eq!(view.input(), "");
        assert_eq!(view.len(), 1);
        assert!(view.is_typing());

        release
            .send(Err(ChatError::Transport("reset".into())))
            .unwrap();
        assert_eq!(pending.await, Submission::Failed);
        assert_eq!(view.input(), "");
    }

    #[tokio::test]
    async fn test_overlapping_submissions_render_in_resolution_order() {
        let view = Rc::new(MemoryView::new());
        let client = GatedClient::default();
        let release_math = client.gate("What is 2+2?");
        let release_geo = client.gate("What is the capital of France?");
        let dispatcher = QueryDispatcher::new(view.clone(), client, &WidgetConfig::default());

        view.type_input("What is 2+2?");
        let math = dispatcher.submit();
        tokio::pin!(math);
        assert!(futures::poll!(&mut math).is_pending());

        view.type_input("What is the capital of France?");
        let geo = dispatcher.submit();
        tokio::pin!(geo);
        assert!(futures::poll!(&mut geo).is_pending());

        // Later question resolves first
        release_geo
            .send(Ok(answer("Paris is the capital.", Some("geography"))))
            .unwrap();
        assert_eq!(geo.await, Submission::Answered);

        // Its completion hid the shared indicator while math is still in flight
        assert!(!view.is_typing());

        release_math.send(Ok(answer("4", Some("math")))).unwrap();
        assert_eq!(math.await, Submission::Answered);

        let log: Vec<_> = view
            .messages()
            .into_iter()
            .map(|m| (m.role, m.text))
            .collect();
        assert_eq!(
            log,
            vec![
                (Role::User, "What is 2+2?".to_owned()),
                (Role::User, "What is the capital of France?".to_owned()),
                (Role::Bot, "Paris is the capital.".to_owned()),
                (Role::Bot, "4".to_owned()),
            ]
        );
        assert!(!view.is_typing());
    }
}
