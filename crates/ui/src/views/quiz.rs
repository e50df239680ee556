use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::OptionSlot;
use services::{OptionView, PageView, QuizProgress, SessionError};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{
    QuizIntent, QuizVm, current_type_line, keyword_line, progress_label, type_result_title,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let bank = ctx.bank();

    let vm = use_signal(|| QuizVm::new(ctx.new_session()));
    let name = use_signal(String::new);

    let dispatch_intent = {
        let bank = Arc::clone(&bank);
        use_callback(move |intent: QuizIntent| {
            let mut vm = vm;
            let mut name = name;
            let restart = intent == QuizIntent::Restart;

            let result = vm.write().dispatch(&bank, intent);
            match result {
                Ok(()) if restart => name.set(String::new()),
                Ok(()) => {
                    // Logged once per transition; the panel itself re-renders freely.
                    if let Err(err) = vm.read().page(&bank) {
                        tracing::error!(%err, "page cannot be rendered");
                    }
                }
                Err(SessionError::EmptyName) => {}
                // Stale clicks from a page that has already moved on.
                Err(err) => tracing::debug!(%err, "intent ignored"),
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let page = vm.read().page(&bank).map_err(ViewError::from);
    let warning = vm.read().warning();
    let progress = vm.read().progress();

    rsx! {
        div { class: "page quiz-page", id: "quiz-root",
            match page {
                Ok(PageView::Intro) => rsx! {
                    IntroPage { name, warning, on_intent: dispatch_intent }
                },
                Ok(PageView::Question { step_title, text, options, .. }) => rsx! {
                    QuestionPage {
                        step_title,
                        text,
                        options: options.to_vec(),
                        progress,
                        on_intent: dispatch_intent,
                    }
                },
                Ok(PageView::Interstitial) => rsx! {
                    InterstitialPage { on_intent: dispatch_intent }
                },
                Ok(PageView::TypeResult { name, current_type, ideal_type, keyword }) => rsx! {
                    TypeResultPage { name, current_type, ideal_type, keyword, on_intent: dispatch_intent }
                },
                Ok(PageView::FixResult { core_message, direction_message, actions, .. }) => rsx! {
                    FixResultPage {
                        core_message,
                        direction_message,
                        actions: actions.to_vec(),
                        on_intent: dispatch_intent,
                    }
                },
                Err(error) => rsx! {
                    ConfigErrorPanel { error }
                },
            }
        }
    }
}

#[component]
fn IntroPage(
    name: Signal<String>,
    warning: Option<&'static str>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let mut name = name;

    rsx! {
        section { class: "quiz-intro",
            div { class: "center-container",
                h1 { class: "quiz-intro__title", "나의 추구미와 가까워지기" }
                p { "나는 내 추구미와 얼마나 가까울까? 추구미에 따른 보완점 제안 서비스" }
            }
            div { class: "quiz-intro__about",
                h3 { "추구미에 대해 알고 계신가요?" }
                p {
                    "'추구하다'와 '美(아름다울 미)'의 합성어로, "
                    "Z세대가 자신의 이상적인 이미지를 추구하는 과정을 나타내는 신조어입니다."
                }
                p {
                    "이 테스트는 현재의 내 모습과 나의 추구미를 진단하고, "
                    "추구미에 도달하기 위해 보완할 점을 제시해줍니다."
                }
            }
            hr {}
            label { class: "quiz-intro__label", r#for: "quiz-name", "이름을 입력하세요." }
            input {
                class: "quiz-intro__name",
                id: "quiz-name",
                r#type: "text",
                placeholder: "이름 입력",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.data.key() == Key::Enter {
                        evt.prevent_default();
                        on_intent.call(QuizIntent::Start(name()));
                    }
                },
            }
            if let Some(warning) = warning {
                p { class: "quiz-warning", role: "alert", "{warning}" }
            }
            button {
                class: "btn btn-primary quiz-start",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start(name())),
                "테스트를 시작하시겠습니까?"
            }
        }
    }
}

#[component]
fn QuestionPage(
    step_title: &'static str,
    text: String,
    options: Vec<OptionView>,
    progress: Option<QuizProgress>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        section { class: "quiz-question",
            div { class: "center-container",
                h3 { class: "quiz-step", "{step_title}" }
            }
            if let Some(progress) = progress {
                ProgressBar { progress }
            }
            hr {}
            div { class: "question-title", "{text}" }
            div { class: "quiz-options",
                for option in options {
                    OptionButton {
                        key: "{option.slot}",
                        slot: option.slot,
                        text: option.text,
                        on_intent,
                    }
                }
            }
        }
    }
}

#[component]
fn ProgressBar(progress: QuizProgress) -> Element {
    let label = progress_label(progress);
    let percent = (progress.fraction() * 100.0).round();

    rsx! {
        div { class: "quiz-progress",
            div { class: "quiz-progress__track",
                div { class: "quiz-progress__fill", style: "width: {percent}%" }
            }
            span { class: "quiz-progress__label", "{label}" }
        }
    }
}

#[component]
fn OptionButton(slot: OptionSlot, text: String, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        button {
            class: "quiz-option",
            id: "quiz-option-{slot}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::Select(slot)),
            "{text}"
        }
    }
}

#[component]
fn InterstitialPage(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-interstitial",
            h3 { class: "center-container", "다음 스텝을 진행합니다." }
            button {
                class: "btn btn-primary",
                id: "quiz-continue",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Continue),
                "계속하기"
            }
        }
    }
}

#[component]
fn TypeResultPage(
    name: String,
    current_type: String,
    ideal_type: String,
    keyword: String,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let title = type_result_title(&name, &ideal_type);
    let current = current_type_line(&current_type);
    let keyword = keyword_line(&keyword);

    rsx! {
        section { class: "quiz-result",
            div { class: "center-container",
                h2 { class: "quiz-result__title", "{title}" }
                p { class: "quiz-result__keyword", b { "{keyword}" } }
                p { class: "quiz-result__current", "{current}" }
            }
            hr {}
            button {
                class: "btn btn-primary",
                id: "quiz-confirm",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Confirm),
                "보완점 확인하기"
            }
        }
    }
}

#[component]
fn FixResultPage(
    core_message: String,
    direction_message: String,
    actions: Vec<String>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        section { class: "quiz-fix",
            div { class: "center-container",
                h3 { "추구미에 도달하기 위한 [보완점]을 제시해드릴게요" }
            }
            div { class: "fix-box",
                h3 { "핵심 메시지" }
                p { class: "fix-box__core", "{core_message}" }
                h3 { "보완 방향" }
                p { class: "fix-box__direction", "{direction_message}" }
                h3 { "일상 속 실천" }
                ol { class: "fix-box__actions",
                    for action in actions {
                        li { "{action}" }
                    }
                }
            }
            hr {}
            button {
                class: "btn btn-secondary",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "처음으로 돌아가기"
            }
        }
    }
}

#[component]
fn ConfigErrorPanel(error: ViewError) -> Element {
    let title = ViewError::title();

    rsx! {
        div { class: "quiz-config-error", role: "alert",
            h2 { "{title}" }
            pre { "{error.message()}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
