use quiz_core::model::{OptionSlot, PageLayout};
use services::{QuizEvent, QuizSession};

use super::test_harness::{sample_bank, setup_view_harness};
use crate::vm::{EMPTY_NAME_WARNING, QuizIntent, QuizVm};

#[tokio::test(flavor = "current_thread")]
async fn intro_renders_name_prompt_and_start_button() {
    let harness = setup_view_harness(sample_bank().await);
    let html = harness.render();

    for expected in ["나의 추구미와 가까워지기", "이름을 입력하세요.", "테스트를 시작하시겠습니까?"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains(EMPTY_NAME_WARNING), "unexpected warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn blank_name_shows_warning_and_stays_on_intro() {
    let mut harness = setup_view_harness(sample_bank().await);

    harness.send(QuizIntent::Start("   ".into()));

    let html = harness.render();
    assert!(html.contains(EMPTY_NAME_WARNING), "missing warning in {html}");
    assert!(html.contains("quiz-start"), "missing start button in {html}");
    assert_eq!(harness.vm().session().state().page(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn question_page_shows_step_progress_and_five_options() {
    let mut harness = setup_view_harness(sample_bank().await);

    harness.send(QuizIntent::Start("유나".into()));

    let html = harness.render();
    assert!(html.contains("Step 1. 현재상태 진단"), "missing step header in {html}");
    assert!(html.contains("quiz-progress__label"), "missing progress in {html}");
    let progress = harness.vm().progress().expect("question progress");
    assert_eq!((progress.number(), progress.total), (1, 4));
    assert!(html.contains("주말 아침, 가장 먼저 하는 일은?"), "missing question in {html}");
    for slot in OptionSlot::ALL {
        let id = format!("quiz-option-{slot}");
        assert!(html.contains(&id), "missing {id} in {html}");
    }
    assert!(!html.contains(EMPTY_NAME_WARNING), "stale warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn full_run_reaches_results_and_restarts() {
    let mut harness = setup_view_harness(sample_bank().await);
    harness.send(QuizIntent::Start("유나".into()));

    for _ in 0..4 {
        harness.send(QuizIntent::Select(OptionSlot::E));
    }
    let html = harness.render();
    assert!(html.contains("다음 스텝을 진행합니다."), "missing interstitial in {html}");

    harness.send(QuizIntent::Continue);
    let html = harness.render();
    assert!(html.contains("Step 2. 추구미 진단"), "missing step header in {html}");

    for _ in 0..4 {
        harness.send(QuizIntent::Select(OptionSlot::D));
    }
    let html = harness.render();
    for expected in ["유나님의 추구미는", "클래식", "키워드: 품격", "현재 나의 모습", "스포티"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }

    harness.send(QuizIntent::Confirm);
    let html = harness.render();
    for expected in [
        "핵심 메시지",
        "시간이 지나도 변하지 않는 단정함이 클래식의 힘입니다.",
        "좋은 기본템과 일관된 태도를 쌓아 가세요.",
        "몸에 잘 맞는 셔츠 한 벌 마련하기",
        "약속 시간 10분 전에 도착하기",
        "처음으로 돌아가기",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }

    harness.send(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("테스트를 시작하시겠습니까?"), "missing intro in {html}");
    let vm = harness.vm();
    assert_eq!(vm.session().state().page(), 0);
    assert_eq!(vm.session().name(), "");
}

#[tokio::test(flavor = "current_thread")]
async fn stale_intents_leave_the_page_alone() {
    let mut harness = setup_view_harness(sample_bank().await);

    harness.send(QuizIntent::Confirm);
    harness.send(QuizIntent::Select(OptionSlot::A));

    assert_eq!(harness.vm().session().state().page(), 0);
    assert!(harness.render().contains("quiz-start"));
}

#[tokio::test(flavor = "current_thread")]
async fn render_errors_show_the_configuration_panel() {
    let bank = sample_bank().await;
    let mut harness = setup_view_harness(bank.clone());

    let mut session = QuizSession::new(PageLayout::new(0, 0));
    session
        .apply(&bank, QuizEvent::Start { name: "유나".into() })
        .expect("start");
    session.apply(&bank, QuizEvent::Continue).expect("continue");
    harness.replace_vm(QuizVm::new(session));

    let html = harness.render();
    assert!(html.contains("configuration error"), "missing panel in {html}");
    assert!(html.contains("empty tally"), "missing cause in {html}");
}
