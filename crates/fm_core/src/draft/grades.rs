//! Post-draft grade computation and standout-pick detection.

use crate::models::{Grade, PickResult, Position, StandoutKind, StandoutPick};
use crate::outcome::tables::expected_overall_range;

/// Needs grade: bucketed percentage of the team's analyzed positional needs
/// addressed by drafted positions.
pub fn needs_grade(needs: &[Position], picks: &[PickResult]) -> Grade {
    if needs.is_empty() {
        // Nothing to address; a full roster drafts for depth.
        return Grade::A;
    }
    let addressed = needs
        .iter()
        .filter(|need| picks.iter().any(|p| p.player.position == **need))
        .count();
    Grade::from_percentage(addressed as f32 / needs.len() as f32 * 100.0)
}

/// Per-pick value score against the round's expected overall range:
/// +1/+2 above the top of the range, -1/-2 below the bottom.
pub fn value_score(overall: u8, round: u8) -> i8 {
    let (min, max) = expected_overall_range(round);
    if overall > max + 5 {
        2
    } else if overall > max {
        1
    } else if overall + 5 < min {
        -2
    } else if overall < min {
        -1
    } else {
        0
    }
}

/// Value grade: average per-pick score, bucketed.
pub fn value_grade(picks: &[PickResult]) -> Grade {
    if picks.is_empty() {
        return Grade::C;
    }
    let total: i32 = picks.iter().map(|p| value_score(p.player.overall, p.round) as i32).sum();
    let avg = total as f32 / picks.len() as f32;
    match avg {
        a if a >= 1.5 => Grade::A,
        a if a >= 0.5 => Grade::B,
        a if a >= -0.5 => Grade::C,
        a if a >= -1.5 => Grade::D,
        _ => Grade::F,
    }
}

/// Future-assets grade: net change in next-year picks owned versus
/// originally held.
pub fn future_assets_grade(net_pick_delta: i32) -> Grade {
    match net_pick_delta {
        d if d >= 3 => Grade::A,
        d if d >= 1 => Grade::B,
        0 => Grade::C,
        d if d >= -3 => Grade::D,
        _ => Grade::F,
    }
}

/// Overall grade: average of the three grades' point values, re-bucketed.
pub fn overall_grade(needs: Grade, value: Grade, future: Grade) -> Grade {
    Grade::from_points((needs.points() + value.points() + future.points()) / 3.0)
}

/// Standout picks for one team: the biggest steal, the worst reach (only
/// if it misses the expected floor by more than 3), and the highest-upside
/// selection. At most three entries.
pub fn standouts(picks: &[PickResult]) -> Vec<StandoutPick> {
    let mut out = Vec::new();

    let steal = picks
        .iter()
        .map(|p| (p, p.player.overall as i16 - expected_overall_range(p.round).1 as i16))
        .filter(|(_, margin)| *margin > 0)
        .max_by_key(|(_, margin)| *margin);
    if let Some((pick, margin)) = steal {
        out.push(StandoutPick {
            kind: StandoutKind::Steal,
            player_name: pick.player.name.clone(),
            round: pick.round,
            pick: pick.pick,
            detail: format!("{} over the round {} ceiling", margin, pick.round),
        });
    }

    let reach = picks
        .iter()
        .map(|p| (p, p.player.overall as i16 - expected_overall_range(p.round).0 as i16))
        .filter(|(_, margin)| *margin < -3)
        .min_by_key(|(_, margin)| *margin);
    if let Some((pick, margin)) = reach {
        out.push(StandoutPick {
            kind: StandoutKind::Reach,
            player_name: pick.player.name.clone(),
            round: pick.round,
            pick: pick.pick,
            detail: format!("{} under the round {} floor", -margin, pick.round),
        });
    }

    if let Some(upside) = picks.iter().max_by_key(|p| p.player.potential) {
        out.push(StandoutPick {
            kind: StandoutKind::HighUpside,
            player_name: upside.player.name.clone(),
            round: upside.round,
            pick: upside.pick,
            detail: format!("{} potential", upside.player.potential),
        });
    }

    out.truncate(3);
    out
}
