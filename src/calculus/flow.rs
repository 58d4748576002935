//! Animation flow composer
//!
//! Pure lookup keyed by (topic, rule, has limits). Every flow opens with
//! `show_formula` and closes with `show_final_answer`.
//!
//! ```text
//! show_formula
//!   <rule body for topic>
//!   [integration] show_square_brackets .. subtract_limits | add_constant_c
//! show_final_answer
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules::Rule;
use crate::classifier::Topic;
use crate::solver::{SolveError, SolveOutcome};

/// Named animation stage consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStage {
    ShowFormula,
    BringPowerDown,
    SubtractOneFromPower,
    PullConstantOut,
    MultiplyConstant,
    SplitExpression,
    DifferentiateTermsSeparately,
    ConstantBecomesZero,
    AddOneToPower,
    DivideByNewPower,
    IntegrateTermsSeparately,
    AttachVariableX,
    ShowSquareBrackets,
    ApplyUpperLimit,
    ApplyLowerLimit,
    SubtractLimits,
    AddConstantC,
    ShowFinalAnswer,
}

impl AnimationStage {
    /// Returns the wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationStage::ShowFormula => "show_formula",
            AnimationStage::BringPowerDown => "bring_power_down",
            AnimationStage::SubtractOneFromPower => "subtract_one_from_power",
            AnimationStage::PullConstantOut => "pull_constant_out",
            AnimationStage::MultiplyConstant => "multiply_constant",
            AnimationStage::SplitExpression => "split_expression",
            AnimationStage::DifferentiateTermsSeparately => "differentiate_terms_separately",
            AnimationStage::ConstantBecomesZero => "constant_becomes_zero",
            AnimationStage::AddOneToPower => "add_one_to_power",
            AnimationStage::DivideByNewPower => "divide_by_new_power",
            AnimationStage::IntegrateTermsSeparately => "integrate_terms_separately",
            AnimationStage::AttachVariableX => "attach_variable_x",
            AnimationStage::ShowSquareBrackets => "show_square_brackets",
            AnimationStage::ApplyUpperLimit => "apply_upper_limit",
            AnimationStage::ApplyLowerLimit => "apply_lower_limit",
            AnimationStage::SubtractLimits => "subtract_limits",
            AnimationStage::AddConstantC => "add_constant_c",
            AnimationStage::ShowFinalAnswer => "show_final_answer",
        }
    }

    /// Short, calm narration spoken while the stage plays
    pub fn narration(&self) -> &'static str {
        match self {
            AnimationStage::ShowFormula => "First, let's remember the rule.",
            AnimationStage::BringPowerDown => "Bring the power down to the front.",
            AnimationStage::SubtractOneFromPower => "Subtract one from the power.",
            AnimationStage::PullConstantOut => "Keep the number in front to one side.",
            AnimationStage::MultiplyConstant => "Multiply the numbers together.",
            AnimationStage::SplitExpression => "We split the expression into separate terms.",
            AnimationStage::DifferentiateTermsSeparately => "Now we solve each part on its own.",
            AnimationStage::ConstantBecomesZero => "The constant becomes zero.",
            AnimationStage::AddOneToPower => "Add one to the power.",
            AnimationStage::DivideByNewPower => "Divide by the new power.",
            AnimationStage::IntegrateTermsSeparately => "Now we solve each part on its own.",
            AnimationStage::AttachVariableX => "The number gets an x next to it.",
            AnimationStage::ShowSquareBrackets => "We put brackets around our answer.",
            AnimationStage::ApplyUpperLimit => "First, we plug in the top number.",
            AnimationStage::ApplyLowerLimit => "Then, we plug in the bottom number.",
            AnimationStage::SubtractLimits => "Subtract to get the final area.",
            AnimationStage::AddConstantC => "Don't forget to add C.",
            AnimationStage::ShowFinalAnswer => "This is the final answer.",
        }
    }
}

impl fmt::Display for AnimationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered animation stages for one calculus question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationFlow(Vec<AnimationStage>);

impl AnimationFlow {
    /// Returns the stages in play order
    pub fn stages(&self) -> &[AnimationStage] {
        &self.0
    }

    /// Returns the wire tokens in play order
    pub fn tokens(&self) -> Vec<&'static str> {
        self.0.iter().map(AnimationStage::as_str).collect()
    }

    pub fn contains(&self, stage: AnimationStage) -> bool {
        self.0.contains(&stage)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn rule_body(topic: Topic, rule: Rule) -> Option<&'static [AnimationStage]> {
    use AnimationStage::*;

    let body: &'static [AnimationStage] = match (topic, rule) {
        (Topic::Differentiation, Rule::PowerRule | Rule::LinearRule) => {
            &[BringPowerDown, SubtractOneFromPower]
        }
        (Topic::Differentiation, Rule::ConstantMultipleRule) => &[
            PullConstantOut,
            BringPowerDown,
            MultiplyConstant,
            SubtractOneFromPower,
        ],
        (Topic::Differentiation, Rule::SumRule) => {
            &[SplitExpression, DifferentiateTermsSeparately]
        }
        (Topic::Differentiation, Rule::ConstantRule) => &[ConstantBecomesZero],
        (Topic::Integration, Rule::PowerRule | Rule::LinearRule) => {
            &[AddOneToPower, DivideByNewPower]
        }
        (Topic::Integration, Rule::ConstantMultipleRule) => {
            &[PullConstantOut, AddOneToPower, DivideByNewPower]
        }
        (Topic::Integration, Rule::SumRule) => &[SplitExpression, IntegrateTermsSeparately],
        (Topic::Integration, Rule::ConstantRule) => &[AttachVariableX],
        (Topic::NumericalReasoning, _) => return None,
    };
    Some(body)
}

const LIMITS_SUFFIX: [AnimationStage; 4] = [
    AnimationStage::ShowSquareBrackets,
    AnimationStage::ApplyUpperLimit,
    AnimationStage::ApplyLowerLimit,
    AnimationStage::SubtractLimits,
];

/// Composes the animation flow for a calculus question.
///
/// Every calculus (topic, rule) pair is mapped. A numerical topic has no
/// flow and is rejected with `STEP_FLOW_UNMAPPED`.
pub fn compose_flow(topic: Topic, rule: Rule, has_limits: bool) -> SolveOutcome<AnimationFlow> {
    let body = rule_body(topic, rule).ok_or_else(SolveError::flow_unmapped)?;

    let mut stages = Vec::with_capacity(body.len() + 6);
    stages.push(AnimationStage::ShowFormula);
    stages.extend_from_slice(body);

    if topic == Topic::Integration {
        if has_limits {
            stages.extend_from_slice(&LIMITS_SUFFIX);
        } else {
            stages.push(AnimationStage::AddConstantC);
        }
    }

    stages.push(AnimationStage::ShowFinalAnswer);
    Ok(AnimationFlow(stages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolveErrorCode;

    const RULES: [Rule; 5] = [
        Rule::PowerRule,
        Rule::LinearRule,
        Rule::ConstantMultipleRule,
        Rule::SumRule,
        Rule::ConstantRule,
    ];

    #[test]
    fn test_differentiation_power_flow() {
        let flow = compose_flow(Topic::Differentiation, Rule::PowerRule, false).unwrap();
        assert_eq!(
            flow.tokens(),
            vec![
                "show_formula",
                "bring_power_down",
                "subtract_one_from_power",
                "show_final_answer"
            ]
        );
    }

    #[test]
    fn test_differentiation_ignores_limits() {
        let with = compose_flow(Topic::Differentiation, Rule::SumRule, true).unwrap();
        let without = compose_flow(Topic::Differentiation, Rule::SumRule, false).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_definite_integral_suffix() {
        let flow = compose_flow(Topic::Integration, Rule::PowerRule, true).unwrap();
        let tokens = flow.tokens();
        assert_eq!(
            &tokens[tokens.len() - 5..],
            &[
                "show_square_brackets",
                "apply_upper_limit",
                "apply_lower_limit",
                "subtract_limits",
                "show_final_answer"
            ]
        );
        assert!(!flow.contains(AnimationStage::AddConstantC));
    }

    #[test]
    fn test_indefinite_integral_suffix() {
        let flow = compose_flow(Topic::Integration, Rule::PowerRule, false).unwrap();
        let tokens = flow.tokens();
        assert_eq!(
            &tokens[tokens.len() - 2..],
            &["add_constant_c", "show_final_answer"]
        );
    }

    #[test]
    fn test_constant_multiple_integration() {
        let flow = compose_flow(Topic::Integration, Rule::ConstantMultipleRule, false).unwrap();
        assert_eq!(
            flow.tokens(),
            vec![
                "show_formula",
                "pull_constant_out",
                "add_one_to_power",
                "divide_by_new_power",
                "add_constant_c",
                "show_final_answer"
            ]
        );
    }

    #[test]
    fn test_every_calculus_flow_is_framed() {
        for topic in [Topic::Differentiation, Topic::Integration] {
            for rule in RULES {
                for has_limits in [false, true] {
                    let flow = compose_flow(topic, rule, has_limits).unwrap();
                    let stages = flow.stages();
                    assert!(flow.len() >= 3);
                    assert_eq!(stages[0], AnimationStage::ShowFormula);
                    assert_eq!(stages[stages.len() - 1], AnimationStage::ShowFinalAnswer);
                }
            }
        }
    }

    #[test]
    fn test_numerical_topic_unmapped() {
        let err = compose_flow(Topic::NumericalReasoning, Rule::PowerRule, false).unwrap_err();
        assert_eq!(err.code(), SolveErrorCode::StepFlowUnmapped);
    }

    #[test]
    fn test_flow_serializes_as_tokens() {
        let flow = compose_flow(Topic::Differentiation, Rule::ConstantRule, false).unwrap();
        let json = serde_json::to_string(&flow).unwrap();
        assert_eq!(
            json,
            r#"["show_formula","constant_becomes_zero","show_final_answer"]"#
        );
    }

    #[test]
    fn test_every_stage_has_narration() {
        let flow = compose_flow(Topic::Integration, Rule::SumRule, true).unwrap();
        for stage in flow.stages() {
            assert!(!stage.narration().is_empty());
        }
    }
}
