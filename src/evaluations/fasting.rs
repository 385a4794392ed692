//! Fasting glucose/ketone scoring tables.
//!
//! These are product health-advice rules, not algorithms: ordered threshold
//! chains where the first matching bound wins. Scores are 1~5 and the reason
//! strings are the product's own copy. Do not reword them.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub score: u8,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayEvaluation {
    pub final_score: u8,
    pub summary: &'static str,
    pub glucose: Evaluation,
    pub ketone: Evaluation,
    pub final_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetabolicState {
    pub score: u8,
    pub state: &'static str,
    pub reason: &'static str,
}

/// Fasting glucose in mg/dL.
pub fn evaluate_glucose(g: f64) -> Evaluation {
    if g < 65.0 {
        return Evaluation { score: 1, reason: "저혈당 위험 구간 (공복 혈당이 너무 낮음)" };
    }
    if g < 70.0 {
        return Evaluation { score: 2, reason: "혈당이 다소 낮아 컨디션 저하 가능" };
    }
    if g <= 85.0 {
        return Evaluation { score: 5, reason: "공복 혈당 최적 구간 (인슐린 안정)" };
    }
    if g <= 90.0 {
        return Evaluation { score: 4, reason: "양호한 혈당 상태" };
    }
    if g <= 100.0 {
        return Evaluation { score: 3, reason: "공복 혈당이 다소 높아 조절 여지 있음" };
    }
    if g <= 110.0 {
        return Evaluation { score: 2, reason: "인슐린 반응 증가 가능성" };
    }
    Evaluation { score: 1, reason: "공복 혈당 높음 (인슐린 저항 가능)" }
}

/// Blood ketone in mmol/L.
pub fn evaluate_ketone(k: f64) -> Evaluation {
    if k < 0.3 {
        return Evaluation { score: 1, reason: "케토시스 거의 없음 (탄수 의존 상태)" };
    }
    if k < 0.5 {
        return Evaluation { score: 2, reason: "케토시스 진입 전 단계" };
    }
    if k < 1.0 {
        return Evaluation { score: 3, reason: "케토시스 시작 단계" };
    }
    if k < 1.5 {
        return Evaluation { score: 4, reason: "안정적인 케토시스 상태" };
    }
    if k <= 2.0 {
        return Evaluation { score: 5, reason: "지방 연소 최적 케토시스" };
    }
    if k <= 3.0 {
        return Evaluation { score: 4, reason: "케톤이 다소 높음 (전해질/수분 체크 권장)" };
    }
    Evaluation { score: 3, reason: "케톤 과도 (컨디션 저하 가능)" }
}

fn summary_for(score: u8) -> &'static str {
    match score {
        5 => "완벽한 상태",
        4 => "매우 좋은 상태",
        3 => "유지 단계",
        2 => "조정 필요",
        _ => "문제 있음",
    }
}

/// Combined daily score: the lower of the two factor scores wins.
pub fn evaluate_day(g: f64, k: f64) -> DayEvaluation {
    let glucose = evaluate_glucose(g);
    let ketone = evaluate_ketone(k);
    let final_score = glucose.score.min(ketone.score);

    let final_reason = format!(
        "혈당 평가: {} / 케톤 평가: {} → 낮은 점수 기준으로 종합 판단",
        glucose.reason, ketone.reason
    );

    DayEvaluation {
        final_score,
        summary: summary_for(final_score),
        glucose,
        ketone,
        final_reason,
    }
}

/// Two-factor metabolic state label. Ordered range predicates, first match
/// wins, with a final catch-all.
pub fn evaluate_metabolic_state(g: f64, k: f64) -> MetabolicState {
    if g < 65.0 {
        return MetabolicState {
            score: 1,
            state: "저혈당 주의",
            reason: "공복 혈당이 너무 낮음 (케톤과 무관하게 저혈당 우선 관리)",
        };
    }
    if k > 3.0 {
        return MetabolicState {
            score: 2,
            state: "케톤 과다",
            reason: "케톤이 과도하게 높음 (전해질/수분 보충 권장)",
        };
    }
    if g <= 90.0 && (1.0..=2.0).contains(&k) {
        return MetabolicState {
            score: 5,
            state: "최적 지방 연소",
            reason: "낮은 공복 혈당과 안정적인 케톤 (지방 대사 우세)",
        };
    }
    if g <= 100.0 && k >= 0.5 {
        return MetabolicState {
            score: 4,
            state: "케토시스 진행 중",
            reason: "혈당 안정, 케톤 상승 중",
        };
    }
    if g > 100.0 && k >= 0.5 {
        return MetabolicState {
            score: 2,
            state: "혼합 연료 상태",
            reason: "혈당과 케톤이 동시에 높음 (인슐린 저항 가능성)",
        };
    }
    if g > 100.0 {
        return MetabolicState {
            score: 1,
            state: "당 대사 우세",
            reason: "공복 혈당 높고 케토시스 없음 (탄수 의존 상태)",
        };
    }
    MetabolicState {
        score: 3,
        state: "대사 전환 구간",
        reason: "혈당은 안정적이나 케토시스 미진입",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glucose_threshold_buckets() {
        assert_eq!(evaluate_glucose(60.0).score, 1);
        assert_eq!(evaluate_glucose(64.9).score, 1);
        assert_eq!(evaluate_glucose(65.0).score, 2);
        assert_eq!(evaluate_glucose(69.9).score, 2);
        assert_eq!(evaluate_glucose(70.0).score, 5);
        assert_eq!(evaluate_glucose(85.0).score, 5);
        assert_eq!(evaluate_glucose(86.0).score, 4);
        assert_eq!(evaluate_glucose(90.0).score, 4);
        assert_eq!(evaluate_glucose(91.0).score, 3);
        assert_eq!(evaluate_glucose(100.0).score, 3);
        assert_eq!(evaluate_glucose(101.0).score, 2);
        assert_eq!(evaluate_glucose(110.0).score, 2);
        assert_eq!(evaluate_glucose(111.0).score, 1);
    }

    #[test]
    fn test_glucose_reason_strings() {
        assert_eq!(evaluate_glucose(85.0).reason, "공복 혈당 최적 구간 (인슐린 안정)");
        assert_eq!(evaluate_glucose(86.0).reason, "양호한 혈당 상태");
        assert_eq!(evaluate_glucose(111.0).reason, "공복 혈당 높음 (인슐린 저항 가능)");
    }

    #[test]
    fn test_ketone_threshold_buckets() {
        assert_eq!(evaluate_ketone(0.1).score, 1);
        assert_eq!(evaluate_ketone(0.3).score, 2);
        assert_eq!(evaluate_ketone(0.5).score, 3);
        assert_eq!(evaluate_ketone(0.99).score, 3);
        assert_eq!(evaluate_ketone(1.0).score, 4);
        assert_eq!(evaluate_ketone(1.49).score, 4);
        assert_eq!(evaluate_ketone(1.5).score, 5);
        assert_eq!(evaluate_ketone(2.0).score, 5);
        assert_eq!(evaluate_ketone(2.1).score, 4);
        assert_eq!(evaluate_ketone(3.0).score, 4);
        assert_eq!(evaluate_ketone(3.1).score, 3);
    }

    #[test]
    fn test_scores_always_in_band() {
        for g in (0..400).map(f64::from) {
            let s = evaluate_glucose(g).score;
            assert!((1..=5).contains(&s), "glucose {g} gave score {s}");
        }
        for tenths in 0..200 {
            let k = f64::from(tenths) / 10.0;
            let s = evaluate_ketone(k).score;
            assert!((1..=5).contains(&s), "ketone {k} gave score {s}");
        }
    }

    #[test]
    fn test_day_evaluation_takes_minimum_score() {
        // glucose 80 → 5, ketone 0.4 → 2, so the day scores 2
        let day = evaluate_day(80.0, 0.4);
        assert_eq!(day.final_score, 2);
        assert_eq!(day.summary, "조정 필요");
        assert_eq!(day.glucose.score, 5);
        assert_eq!(day.ketone.score, 2);
        assert!(day.final_reason.contains(day.glucose.reason));
        assert!(day.final_reason.contains(day.ketone.reason));
    }

    #[test]
    fn test_day_evaluation_perfect_day() {
        let day = evaluate_day(80.0, 1.8);
        assert_eq!(day.final_score, 5);
        assert_eq!(day.summary, "완벽한 상태");
    }

    #[test]
    fn test_metabolic_state_first_match_wins() {
        // Low glucose takes precedence over any ketone band
        assert_eq!(evaluate_metabolic_state(60.0, 1.5).state, "저혈당 주의");
        // Excess ketones checked before the optimal band
        assert_eq!(evaluate_metabolic_state(80.0, 3.5).state, "케톤 과다");
        assert_eq!(evaluate_metabolic_state(80.0, 1.5).state, "최적 지방 연소");
        assert_eq!(evaluate_metabolic_state(95.0, 0.8).state, "케토시스 진행 중");
        assert_eq!(evaluate_metabolic_state(105.0, 0.8).state, "혼합 연료 상태");
        assert_eq!(evaluate_metabolic_state(110.0, 0.1).state, "당 대사 우세");
        // Catch-all
        assert_eq!(evaluate_metabolic_state(95.0, 0.1).state, "대사 전환 구간");
    }

    #[test]
    fn test_metabolic_scores_in_band() {
        for g in [60.0, 70.0, 85.0, 95.0, 105.0, 130.0] {
            for k in [0.1, 0.4, 0.8, 1.2, 2.0, 2.5, 3.5] {
                let m = evaluate_metabolic_state(g, k);
                assert!((1..=5).contains(&m.score), "({g}, {k}) gave {}", m.score);
            }
        }
    }
}
