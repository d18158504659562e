use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

/// Precedence levels of the binary operators, loosest first.
///
/// Every binary operator is left-associative. `Default` sits below all
/// operators and is where a full expression starts; `Primary` sits above
/// all of them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Primary,
}

impl BindingPower {
    /// The next tighter level.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::LogicalOr,
            BindingPower::LogicalOr => BindingPower::LogicalAnd,
            BindingPower::LogicalAnd => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

lazy_static! {
    pub static ref BP_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();

        // Logical
        map.insert(TokenKind::Or, BindingPower::LogicalOr);
        map.insert(TokenKind::And, BindingPower::LogicalAnd);

        // Equality and relational
        map.insert(TokenKind::Equals, BindingPower::Equality);
        map.insert(TokenKind::NotEquals, BindingPower::Equality);
        map.insert(TokenKind::Less, BindingPower::Relational);
        map.insert(TokenKind::LessEquals, BindingPower::Relational);
        map.insert(TokenKind::Greater, BindingPower::Relational);
        map.insert(TokenKind::GreaterEquals, BindingPower::Relational);

        // Additive and multiplicative
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map.insert(TokenKind::Percent, BindingPower::Multiplicative);

        map
    };
}

/// Precedence of a binary operator token, `None` for anything else.
pub fn binding_power(kind: TokenKind) -> Option<BindingPower> {
    BP_LOOKUP.get(&kind).copied()
}
