use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use serde_json::json;

use crate::ecs::resources::TelemetryKind;
use crate::model::{DeathCause, PickupKind, TerminalCause};

use super::applicator::ApplyCtx;

/// Player collected a resource: health (capped), score, and — for rabbits —
/// progress toward the burst-energy refill.
pub(crate) fn apply_collect(ctx: &mut ApplyCtx, world: &mut World, pickup: Entity, kind: PickupKind) {
    // Consumed by an earlier command this tick; a pickup pays out once.
    if world.get_entity(pickup).is_err() {
        return;
    }
    world.despawn(pickup);

    let gain = kind.health_value();
    ctx.data.gain_health(f64::from(gain));
    ctx.data.score += u64::from(gain) * 10;

    if kind == PickupKind::Rabbit {
        ctx.data.rabbits_collected += 1;
        if ctx.data.rabbits_collected >= ctx.config.rabbits_per_burst {
            ctx.data.rabbits_collected = 0;
            ctx.data.refill_energy();
            ctx.outbox.set("burstEnergy", json!(ctx.data.burst_energy));
        }
        ctx.outbox
            .set("rabbitsCollected", json!(ctx.data.rabbits_collected));
    }

    // Healing can lift the family back over the low-health threshold.
    ctx.data.recompute_speed(&ctx.config);

    ctx.outbox.set("health", json!(ctx.data.health));
    ctx.outbox.set("score", json!(ctx.data.score));
    ctx.outbox.set("speed", json!(ctx.data.speed));
    ctx.record(
        TelemetryKind::ResourcePickup,
        json!({ "resource": kind.as_str(), "healthGain": gain, "score": ctx.data.score }),
    );
    tracing::debug!(kind = kind.as_str(), gain, "resource collected");
}

/// Activate the speed burst. Silently ignored unless energy is full and no
/// burst is running.
pub(crate) fn apply_trigger_burst(ctx: &mut ApplyCtx) {
    if ctx.data.speed_burst_active || ctx.data.burst_energy < 100.0 {
        tracing::debug!(
            energy = ctx.data.burst_energy,
            active = ctx.data.speed_burst_active,
            "burst trigger ignored"
        );
        return;
    }

    ctx.data.drain_energy();
    ctx.data.speed_burst_active = true;
    ctx.data.recompute_speed(&ctx.config);
    ctx.burst.ends_at = Some(ctx.now.after_millis(ctx.config.burst_duration_ms));

    ctx.outbox.set("burstEnergy", json!(ctx.data.burst_energy));
    ctx.outbox
        .set("speedBurstActive", json!(ctx.data.speed_burst_active));
    ctx.outbox.set("speed", json!(ctx.data.speed));
    ctx.record(TelemetryKind::SpeedBurst, json!({ "speed": ctx.data.speed }));
}

/// Auto-deactivate an expired burst, restoring the prior speed.
pub(crate) fn apply_end_burst(ctx: &mut ApplyCtx) {
    if !ctx.data.speed_burst_active {
        return;
    }
    ctx.data.speed_burst_active = false;
    ctx.burst.ends_at = None;
    ctx.data.recompute_speed(&ctx.config);

    ctx.outbox
        .set("speedBurstActive", json!(ctx.data.speed_burst_active));
    ctx.outbox.set("speed", json!(ctx.data.speed));
}

/// Periodic decay/regen: health drops, burst energy trickles back while no
/// burst is running. Starvation is terminal.
pub(crate) fn apply_economy_tick(ctx: &mut ApplyCtx) {
    ctx.data.decay_health(ctx.config.health_decay);
    if !ctx.data.speed_burst_active && ctx.data.burst_energy < 100.0 {
        ctx.data.gain_energy(ctx.config.energy_regen);
        ctx.outbox.set("burstEnergy", json!(ctx.data.burst_energy));
    }
    ctx.data.recompute_speed(&ctx.config);

    ctx.outbox.set("health", json!(ctx.data.health));
    ctx.outbox.set("speed", json!(ctx.data.speed));

    if ctx.data.health <= 0.0 {
        ctx.terminate(TerminalCause::Death(DeathCause::Starvation));
    }
}
