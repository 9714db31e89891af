use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Difficulty, QuestionType, QuizItem, QuizOptions};
use quiz_core::time::fixed_clock;
use services::{JokeSource, JokeText, QuestionSource, QuizLoopService, SourceError, Ticker};

use tokio::sync::Notify;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizShell;
use crate::views::shell::{ShellCallbacks, ShellTestHandles};

pub struct FakeQuestions {
    items: Vec<QuizItem>,
    calls: AtomicUsize,
}

impl FakeQuestions {
    pub fn with_batch(n: usize) -> Self {
        let items = (0..n)
            .map(|i| {
                QuizItem::new(
                    "Science: Computers",
                    Difficulty::Easy,
                    format!("Question {i}"),
                    vec!["w1".into(), "right".into(), "w2".into(), "w3".into()],
                    1,
                    QuestionType::Multiple,
                )
                .expect("valid item")
            })
            .collect();
        Self {
            items,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionSource for FakeQuestions {
    async fn fetch(&self, options: &QuizOptions) -> Result<Vec<QuizItem>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .items
            .iter()
            .take(usize::from(options.amount()))
            .cloned()
            .collect())
    }
}

/// Holds the first load until `release` is called.
pub struct GatedQuestions {
    inner: FakeQuestions,
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedQuestions {
    pub fn with_batch(n: usize) -> Self {
        Self {
            inner: FakeQuestions::with_batch(n),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl QuestionSource for GatedQuestions {
    async fn fetch(&self, options: &QuizOptions) -> Result<Vec<QuizItem>, SourceError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.gate.notified().await;
        }
        self.inner.fetch(options).await
    }
}

pub struct BrokenQuestions;

#[async_trait]
impl QuestionSource for BrokenQuestions {
    async fn fetch(&self, _options: &QuizOptions) -> Result<Vec<QuizItem>, SourceError> {
        Err(SourceError::Provider { code: 2 })
    }
}

struct CannedJoke;

#[async_trait]
impl JokeSource for CannedJoke {
    async fn fetch(&self) -> Result<JokeText, SourceError> {
        Ok(JokeText {
            headline: "Why do programmers prefer dark mode?".to_string(),
            punchline: Some("Because light attracts bugs.".to_string()),
        })
    }
}

/// Never ticks, so rendered timers stay at the full duration.
pub struct FrozenTicker;

#[async_trait]
impl Ticker for FrozenTicker {
    async fn wait(&self) {
        std::future::pending::<()>().await;
    }
}

/// Ticks every millisecond.
pub struct FastTicker;

#[async_trait]
impl Ticker for FastTicker {
    async fn wait(&self) {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
}

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    ticker: Arc<dyn Ticker>,
    start_sample: bool,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn ticker(&self) -> Arc<dyn Ticker> {
        Arc::clone(&self.ticker)
    }

    fn start_sample_on_launch(&self) -> bool {
        self.start_sample
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    handles: ShellTestHandles,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizShell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: ShellTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Drive the dom until the rendered html contains `needle`, or give up.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..200 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            let _ = tokio::time::timeout(Duration::from_millis(20), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
        self.render()
    }

    /// Invoke one of the shell's callbacks as a user event would.
    pub fn act(&mut self, action: impl FnOnce(ShellCallbacks)) {
        let callbacks = self.handles.shell();
        self.dom.in_runtime(|| action(callbacks));
        drive_dom(&mut self.dom);
    }

    pub fn fetch_joke(&mut self) {
        let fetch = self.handles.joke();
        self.dom.in_runtime(|| fetch.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_shell_harness(questions: Arc<dyn QuestionSource>, start_sample: bool) -> ViewHarness {
    setup_shell_harness_with(questions, start_sample, Arc::new(FrozenTicker), 25)
}

pub fn setup_shell_harness_with(
    questions: Arc<dyn QuestionSource>,
    start_sample: bool,
    ticker: Arc<dyn Ticker>,
    seconds_per_question: u32,
) -> ViewHarness {
    let seconds = NonZeroU32::new(seconds_per_question).expect("non-zero");
    let quiz_loop = Arc::new(QuizLoopService::new(
        fixed_clock(),
        questions,
        Arc::new(CannedJoke),
        seconds,
    ));
    let app = Arc::new(TestApp {
        quiz_loop,
        ticker,
        start_sample,
    });
    let handles = ShellTestHandles::default();
    ViewHarness {
        dom: VirtualDom::new_with_props(
            ShellHarness,
            ShellHarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        handles,
    }
}
