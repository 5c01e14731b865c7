//! Type annotation parsing.
//!
//! Supports bare symbol types (`int`) and array types (`[]int`). The grammar
//! uses the same NUD/LED machinery as expressions; no LED handlers are
//! registered yet, so `parse_type` never loops.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::Type,
        types::{ArrayType, SymbolType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, Type, BindingPower) -> Result<Type, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Type alias for type binding power lookup table.
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Registers the type parsing handlers.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_symbol_type);
    parser.type_nud(TokenKind::OpenBracket, parse_array_type);
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Type::Symbol(SymbolType {
        name: token.value,
        position: token.span.start,
    }))
}

pub fn parse_array_type(parser: &mut Parser) -> Result<Type, Error> {
    let position = parser.advance().span.start.clone();
    parser.expect(TokenKind::CloseBracket)?;
    let underlying = parse_type(parser, BindingPower::Default)?;

    Ok(Type::Array(ArrayType {
        underlying: Box::new(underlying),
        position,
    }))
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<Type, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_type_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected a type"),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud_fn(parser)?;

    while *parser
        .get_type_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let led_fn = match parser.get_type_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => return Err(parser.unexpected_token()),
        };
        let token_bp = *parser
            .get_type_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        left = led_fn(parser, left, token_bp)?;
    }

    Ok(left)
}
