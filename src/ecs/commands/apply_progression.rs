use serde_json::json;

use crate::ecs::resources::TelemetryKind;
use crate::model::{Season, TerminalCause};

use super::applicator::ApplyCtx;

/// One second of the countdown elapsed. Running out the clock completes the
/// run.
pub(crate) fn apply_countdown_tick(ctx: &mut ApplyCtx) {
    ctx.data.time_remaining = ctx.data.time_remaining.saturating_sub(1);
    ctx.outbox
        .set("timeRemaining", json!(ctx.data.time_remaining));

    if ctx.data.time_remaining == 0 {
        ctx.terminate(TerminalCause::Completed);
    }
}

/// The month deadline fired: advance the counter, re-derive the season, and
/// check the win condition.
pub(crate) fn apply_advance_month(ctx: &mut ApplyCtx) {
    if ctx.data.current_month < ctx.config.months_to_win {
        ctx.data.current_month += 1;
    }
    ctx.data.season = Season::from_month(ctx.data.current_month);

    ctx.outbox.set("currentMonth", json!(ctx.data.current_month));
    ctx.outbox.set("season", json!(ctx.data.season));
    ctx.record(
        TelemetryKind::MonthReached,
        json!({ "month": ctx.data.current_month, "season": ctx.data.season.as_str() }),
    );
    tracing::debug!(
        month = ctx.data.current_month,
        season = ctx.data.season.as_str(),
        "month reached"
    );

    if ctx.data.current_month >= ctx.config.months_to_win {
        ctx.terminate(TerminalCause::Completed);
    }
}
