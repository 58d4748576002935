//! Human-readable rendering of a solve result
//!
//! Output is deterministic: the same result always renders the same text.

use std::fmt;

use super::result::SolveResult;

/// Plain-text explanation of a solve result
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Whether the engine produced a walkthrough
    pub accepted: bool,
    pub topic: Option<String>,
    /// Calculus rule name
    pub rule: Option<String>,
    /// Numerical sub-type
    pub subtype: Option<String>,
    pub expression: Option<String>,
    pub limits: Option<String>,
    /// `token: narration`, in play order
    pub stages: Vec<String>,
    /// `original -> result` per polynomial term
    pub terms: Vec<String>,
    /// `[scene] text | visual`
    pub scenes: Vec<String>,
    pub answer: Option<String>,
    pub rejection_reason: Option<String>,
    pub rejection_code: Option<String>,
}

impl Explanation {
    fn empty(accepted: bool) -> Self {
        Self {
            accepted,
            topic: None,
            rule: None,
            subtype: None,
            expression: None,
            limits: None,
            stages: Vec::new(),
            terms: Vec::new(),
            scenes: Vec::new(),
            answer: None,
            rejection_reason: None,
            rejection_code: None,
        }
    }

    /// Builds the explanation for any result
    pub fn from_result(result: &SolveResult) -> Self {
        match result {
            SolveResult::Calculus(r) => Self {
                topic: Some(r.topic.as_str().to_string()),
                rule: Some(r.rule.as_str().to_string()),
                expression: Some(r.expression.clone()),
                limits: r.limits.map(|l| format!("{} to {}", l.lower, l.upper)),
                stages: r
                    .animation_flow
                    .stages()
                    .iter()
                    .map(|s| format!("{}: {}", s.as_str(), s.narration()))
                    .collect(),
                terms: r
                    .parsed_terms
                    .iter()
                    .map(|t| format!("{} -> {}", t.term.original, t.result.text))
                    .collect(),
                ..Self::empty(true)
            },
            SolveResult::Numerical(r) => Self {
                topic: Some(r.topic.as_str().to_string()),
                subtype: Some(r.subtype.as_str().to_string()),
                scenes: r
                    .steps
                    .iter()
                    .map(|s| format!("[{}] {} | {}", s.scene, s.text, s.visual))
                    .collect(),
                answer: Some(r.answer.to_string()),
                ..Self::empty(true)
            },
            SolveResult::Error(e) => Self {
                rejection_reason: Some(e.message.clone()),
                rejection_code: Some(e.code.clone()),
                ..Self::empty(false)
            },
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXPLANATION ===")?;

        if !self.accepted {
            writeln!(f, "Status: REJECTED")?;
            if let Some(code) = &self.rejection_code {
                writeln!(f, "Error Code: {}", code)?;
            }
            if let Some(reason) = &self.rejection_reason {
                writeln!(f, "Reason: {}", reason)?;
            }
            return Ok(());
        }

        writeln!(f, "Status: ACCEPTED")?;
        if let Some(topic) = &self.topic {
            writeln!(f, "Topic: {}", topic)?;
        }
        if let Some(subtype) = &self.subtype {
            writeln!(f, "Subtype: {}", subtype)?;
        }
        if let Some(rule) = &self.rule {
            writeln!(f, "Rule: {}", rule)?;
        }
        if let Some(expression) = &self.expression {
            writeln!(f, "Expression: {}", expression)?;
        }
        if let Some(limits) = &self.limits {
            writeln!(f, "Limits: {}", limits)?;
        }
        if !self.stages.is_empty() {
            writeln!(f, "Stages:")?;
            for (i, stage) in self.stages.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, stage)?;
            }
        }
        if !self.terms.is_empty() {
            writeln!(f, "Terms:")?;
            for term in &self.terms {
                writeln!(f, "  - {}", term)?;
            }
        }
        if !self.scenes.is_empty() {
            writeln!(f, "Scenes:")?;
            for scene in &self.scenes {
                writeln!(f, "  {}", scene)?;
            }
        }
        if let Some(answer) = &self.answer {
            writeln!(f, "Answer: {}", answer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn test_explain_calculus() {
        let explanation = Explanation::from_result(&solve("integral of 2x from 0 to 4"));

        assert!(explanation.accepted);
        assert_eq!(explanation.rule, Some("constant_multiple_rule".into()));
        assert_eq!(explanation.limits, Some("0 to 4".into()));
        assert_eq!(explanation.terms, vec!["2x -> x^2".to_string()]);

        let output = format!("{}", explanation);
        assert!(output.contains("ACCEPTED"));
        assert!(output.contains("1. show_formula: First, let's remember the rule."));
        assert!(output.contains("apply_upper_limit"));
    }

    #[test]
    fn test_explain_numerical() {
        let explanation = Explanation::from_result(&solve("how many minutes from 2:30 to 3:15"));

        assert_eq!(explanation.subtype, Some("time_diff".into()));
        assert_eq!(explanation.answer, Some("45".into()));
        assert_eq!(explanation.scenes.len(), 5);

        let output = format!("{}", explanation);
        assert!(output.contains("[1] Identify start and end times. | 2:30  →  3:15"));
        assert!(output.contains("Answer: 45"));
    }

    #[test]
    fn test_explain_rejected() {
        let explanation = Explanation::from_result(&solve("bananas are tasty"));

        assert!(!explanation.accepted);
        assert_eq!(
            explanation.rejection_code,
            Some("STEP_UNSUPPORTED_QUESTION".into())
        );

        let output = format!("{}", explanation);
        assert!(output.contains("REJECTED"));
        assert!(output.contains("STEP_UNSUPPORTED_QUESTION"));
        assert!(!output.contains("Stages:"));
    }

    #[test]
    fn test_explain_deterministic() {
        let first = format!("{}", Explanation::from_result(&solve("differentiate x^2 + x")));
        let second = format!("{}", Explanation::from_result(&solve("differentiate x^2 + x")));
        assert_eq!(first, second);
    }
}
