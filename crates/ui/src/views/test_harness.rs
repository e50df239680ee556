use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, QuestionBank};
use storage::sample::sample_workbook;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::{QuizIntent, QuizVm};

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn vm(&self) -> QuizVm {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.read().clone())
    }

    pub fn replace_vm(&mut self, replacement: QuizVm) {
        let mut vm = self.handles.vm();
        self.dom.in_runtime(|| vm.set(replacement));
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

pub async fn sample_bank() -> QuestionBank {
    let workbook = sample_workbook().expect("sample workbook");
    QuestionBank::load(&workbook).await.expect("load sample bank")
}

pub fn setup_view_harness(bank: QuestionBank) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let app = Arc::new(AppServices::from_bank(bank));
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        handles,
    };
    harness.rebuild();
    harness
}
