use super::{client, notices};
use anyhow::{Result, bail};
use placepick_application::{CheckOutcome, NextStep, NicknameRegistration, SubmitOutcome};
use placepick_core::nickname::{MAX_NICKNAME_CHARS, NicknameState, RuleStatus};
use placepick_infrastructure::ClientConfig;

fn print_rules(state: &NicknameState) {
    let icon = |status: RuleStatus| match status {
        RuleStatus::Pending => "·",
        RuleStatus::Satisfied => "✓",
        RuleStatus::Violated => "✗",
    };
    println!(
        "  {} 한글 최대 {}자",
        icon(state.length_status()),
        MAX_NICKNAME_CHARS
    );
    println!(
        "  {} 공백, 쉼표, 숫자, 특수기호 불가",
        icon(state.content_status())
    );
}

async fn validate_and_check(flow: &NicknameRegistration, name: &str) -> Result<NicknameState> {
    let state = flow.set_text(name).await;
    println!("📝 {}", name);
    print_rules(&state);

    if flow.check_duplicate().await == CheckOutcome::Failed {
        bail!("Duplicate check failed");
    }
    let state = flow.state().await;
    println!("  {}", state.duplicate_status().message());
    Ok(state)
}

pub async fn check(config: &ClientConfig, name: &str) -> Result<()> {
    let flow = NicknameRegistration::new(client(config)?, notices());
    validate_and_check(&flow, name).await?;
    Ok(())
}

pub async fn register(config: &ClientConfig, name: &str) -> Result<()> {
    let flow = NicknameRegistration::new(client(config)?, notices());
    validate_and_check(&flow, name).await?;

    match flow.submit().await {
        SubmitOutcome::Advanced(NextStep::PreferenceSelection) => {
            println!("✅ Nickname registered. Next: choose your preferred places and moods.");
            Ok(())
        }
        SubmitOutcome::NotSubmittable => bail!("'{}' cannot be registered", name),
        SubmitOutcome::Declined => bail!("The server declined '{}'", name),
        SubmitOutcome::Superseded => bail!("The nickname changed during registration"),
        SubmitOutcome::Failed => bail!("Nickname registration failed"),
    }
}
