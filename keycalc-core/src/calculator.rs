//! Calculator context
//!
//! Owns the expression editor and the scratch containers of the pipeline.
//! Each instance is independent; nothing is shared between calculators.
//!
//! # Pipeline
//!
//! ```text
//! editor ─► lexer ─► token queue (infix) ─► shunting-yard ─► token queue (postfix)
//!                                                              │
//!                                  result text ◄─ formatter ◄─ evaluator
//! ```

use crate::config::{CalcConfig, CapacityPolicy};
use crate::containers::{OperandStack, OperatorStack, TokenQueue};
use crate::editor::{DisplayWindow, ExpressionEditor};
use crate::error::{CalcError, CODE_OK};
use crate::evaluator::evaluate_postfix;
use crate::lexer::tokenize;
use crate::numeric::{format_number, ResultText};
use crate::shunting::to_postfix;

/// Outcome of [`Calculator::evaluate`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Evaluation {
    error: Option<CalcError>,
    text: ResultText,
}

impl Evaluation {
    fn ok(text: ResultText) -> Self {
        Self { error: None, text }
    }

    fn failed(error: CalcError) -> Self {
        let mut text = ResultText::new();
        // Every message is shorter than the result capacity
        let _ = text.push_str(error.message());
        Self {
            error: Some(error),
            text,
        }
    }

    /// Numeric status code, [`CODE_OK`] on success
    pub fn code(&self) -> u8 {
        self.error.map_or(CODE_OK, CalcError::code)
    }

    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Formatted result, empty string, or the error message
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Expression calculator
#[derive(Debug, Clone)]
pub struct Calculator {
    editor: ExpressionEditor,
    tokens: TokenQueue,
    operators: OperatorStack,
    operands: OperandStack,
    config: CalcConfig,
}

impl Calculator {
    /// Create a calculator with default settings
    pub const fn new() -> Self {
        Self::with_config(CalcConfig {
            capacity_policy: CapacityPolicy::Strict,
        })
    }

    pub const fn with_config(config: CalcConfig) -> Self {
        Self {
            editor: ExpressionEditor::new(),
            tokens: TokenQueue::new(),
            operators: OperatorStack::new(),
            operands: OperandStack::new(),
            config,
        }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Replace the settings; takes effect on the next evaluation
    pub fn set_config(&mut self, config: CalcConfig) {
        self.config = config;
    }

    /// Reset the expression and all scratch containers
    ///
    /// Settings are kept.
    pub fn init(&mut self) {
        self.editor.clear();
        self.reset_scratch();
    }

    fn reset_scratch(&mut self) {
        self.tokens.clear();
        self.operators.clear();
        self.operands.clear();
    }

    /// Append a character to the expression
    ///
    /// Returns `false` if the character is not part of the calculator
    /// alphabet or the expression is full.
    pub fn input_char(&mut self, ch: char) -> bool {
        self.editor.append(ch)
    }

    pub fn backspace(&mut self) {
        self.editor.backspace();
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    /// Current expression text
    pub fn expression(&self) -> &str {
        self.editor.as_str()
    }

    pub fn editor(&self) -> &ExpressionEditor {
        &self.editor
    }

    /// Expression window starting at `offset`, space padded
    pub fn display_window(&self, offset: usize) -> DisplayWindow {
        self.editor.display_window(offset)
    }

    pub fn max_scroll_offset(&self) -> usize {
        self.editor.max_scroll_offset()
    }

    /// Run the pipeline and return the raw value
    ///
    /// `Ok(None)` for an empty expression. The expression itself is left
    /// unchanged.
    pub fn evaluate_value(&mut self) -> Result<Option<f32>, CalcError> {
        self.reset_scratch();
        if self.editor.is_empty() {
            return Ok(None);
        }

        let policy = self.config.capacity_policy;
        tokenize(self.editor.as_str(), &mut self.tokens, policy)?;
        to_postfix(&mut self.tokens, &mut self.operators, policy)?;
        let value = evaluate_postfix(&self.tokens, &mut self.operands)?;

        trace!("evaluated to {=f32}", value);
        Ok(Some(value))
    }

    /// Run the pipeline and format the outcome for the result line
    pub fn evaluate(&mut self) -> Evaluation {
        let formatted = match self.evaluate_value() {
            Ok(None) => Ok(ResultText::new()),
            Ok(Some(value)) => format_number(value),
            Err(err) => Err(err),
        };

        match formatted {
            Ok(text) => Evaluation::ok(text),
            Err(err) => {
                debug!("evaluation failed: {}", err);
                Evaluation::failed(err)
            }
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_EXPR_LEN;

    fn calc(expression: &str) -> Calculator {
        let mut calc = Calculator::new();
        for ch in expression.chars() {
            assert!(calc.input_char(ch), "rejected {:?}", ch);
        }
        calc
    }

    fn eval(expression: &str) -> Evaluation {
        calc(expression).evaluate()
    }

    #[test]
    fn test_precedence() {
        let result = eval("1+2*3");
        assert!(result.is_ok());
        assert_eq!(result.code(), CODE_OK);
        assert_eq!(result.text(), "7.0");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(eval("(1+2)*3").text(), "9.0");
        assert_eq!(eval("2*((1+2)-4)").text(), "-2.0");
    }

    #[test]
    fn test_unbalanced_parentheses() {
        let result = eval("(1+2");
        assert_eq!(result.error(), Some(CalcError::Syntax));
        assert_eq!(result.code(), 1);
        assert_eq!(result.text(), "Syntax error");

        assert_eq!(eval(")1+2").error(), Some(CalcError::Syntax));
    }

    #[test]
    fn test_division_by_zero() {
        let result = eval("5/0");
        assert_eq!(result.error(), Some(CalcError::DivisionByZero));
        assert_eq!(result.code(), 2);
        assert_eq!(result.text(), "Div by zero");
    }

    #[test]
    fn test_negative_literals() {
        assert_eq!(eval("-5+3").text(), "-2.0");
        assert_eq!(eval("3-(-2)").text(), "5.0");
        assert_eq!(eval("5--3").text(), "8.0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(eval("1/3").text(), "0.33333");
        assert_eq!(eval("2/3").text(), "0.66667");
        assert_eq!(eval("1.5*2").text(), "3.0");
        assert_eq!(eval(".5+.25").text(), "0.75");
    }

    #[test]
    fn test_syntax_errors() {
        for expression in ["1+", "*2", "1.2.3", "()", "1(2)", "-(1+2)"] {
            assert_eq!(eval(expression).error(), Some(CalcError::Syntax), "{}", expression);
        }
    }

    #[test]
    fn test_large_results() {
        let result = eval("50000*100000");
        assert_eq!(result.code(), CODE_OK);
        assert_eq!(result.text(), "5000000000.0");

        assert_eq!(eval("65536*65536").text(), "4294967296.0");
        assert_eq!(eval("-65536*65536*65536").text(), "-281474976710656.0");
    }

    #[test]
    fn test_operand_stack_overflow() {
        // Nine numbers are pending before the first operator applies
        let expression = "1*(1*(1*(1*(1*(1*(1*(1*1)))))))";
        assert!(expression.len() <= MAX_EXPR_LEN);

        let result = eval(expression);
        assert_eq!(result.error(), Some(CalcError::Overflow));
        assert_eq!(result.code(), 3);
        assert_eq!(result.text(), "Syntax error");
    }

    #[test]
    fn test_empty_expression() {
        let mut calc = Calculator::new();
        assert_eq!(calc.evaluate_value(), Ok(None));

        let result = calc.evaluate();
        assert_eq!(result.code(), CODE_OK);
        assert_eq!(result.text(), "");
    }

    #[test]
    fn test_evaluate_value() {
        assert_eq!(calc("8/4*2").evaluate_value(), Ok(Some(4.0)));
        assert_eq!(calc("5/0").evaluate_value(), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let mut calc = calc("(7-2)/3");
        let first = calc.evaluate();
        let second = calc.evaluate();
        assert_eq!(first, second);
        assert_eq!(calc.expression(), "(7-2)/3");
    }

    #[test]
    fn test_input_rejected_at_capacity() {
        let mut calc = calc("12345678901234567890123456789012");
        assert_eq!(calc.expression().len(), MAX_EXPR_LEN);

        assert!(!calc.input_char('3'));
        assert_eq!(calc.expression(), "12345678901234567890123456789012");
    }

    #[test]
    fn test_input_rejects_unknown_characters() {
        let mut calc = calc("1+");
        assert!(!calc.input_char('x'));
        assert!(!calc.input_char(' '));
        assert_eq!(calc.expression(), "1+");
    }

    #[test]
    fn test_editing() {
        let mut calc = calc("12+3");
        calc.backspace();
        assert_eq!(calc.expression(), "12+");
        calc.input_char('4');
        assert_eq!(calc.evaluate().text(), "16.0");

        calc.clear();
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_init_keeps_config() {
        let mut calc = Calculator::with_config(CalcConfig::permissive());
        calc.input_char('1');
        calc.init();
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.config().capacity_policy, CapacityPolicy::Truncate);
    }

    #[test]
    fn test_display_window() {
        let calc = calc("123456789+123456789");
        assert_eq!(calc.max_scroll_offset(), 3);
        assert_eq!(calc.display_window(3).as_str(), "456789+123456789");
        assert_eq!(calc.display_window(0).len(), crate::DISPLAY_WIDTH);
    }

    #[test]
    fn test_capacity_policy_changes_outcome() {
        // 17 open parentheses overflow the operator stack
        let expression = "(((((((((((((((((1";
        let mut strict = calc(expression);
        let result = strict.evaluate();
        assert_eq!(result.error(), Some(CalcError::Overflow));
        assert_eq!((result.code(), result.text()), (3, "Syntax error"));

        strict.set_config(CalcConfig::permissive());
        assert_eq!(strict.evaluate().error(), Some(CalcError::Syntax));
    }

    #[test]
    fn test_calculators_are_independent() {
        let mut a = calc("1+1");
        let mut b = calc("2*3");
        assert_eq!(a.evaluate().text(), "2.0");
        assert_eq!(b.evaluate().text(), "6.0");
        a.clear();
        assert_eq!(b.expression(), "2*3");
    }
}
