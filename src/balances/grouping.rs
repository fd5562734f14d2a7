// SPDX-FileCopyrightText: 2026 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Chain grouping for token lists.

use std::collections::HashMap;

use alloy_primitives::ChainId;

use crate::types::TokenDefinition;

/// Partition tokens by chain, preserving order.
///
/// Groups appear in the order each chain first appears in the input, and
/// tokens within a group keep their relative input order. Pure and total;
/// the aggregator relies on both orderings when zipping results back.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use walletscan::{group_by_chain, TokenDefinition};
///
/// let tokens = vec![
///     TokenDefinition::new(1, Address::ZERO, 18, "A"),
///     TokenDefinition::new(137, Address::ZERO, 6, "B"),
///     TokenDefinition::new(1, Address::ZERO, 8, "C"),
/// ];
///
/// let groups = group_by_chain(&tokens);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].0, 1);
/// assert_eq!(groups[0].1.len(), 2);
/// assert_eq!(groups[1].0, 137);
/// ```
pub fn group_by_chain(tokens: &[TokenDefinition]) -> Vec<(ChainId, Vec<TokenDefinition>)> {
    let mut groups: Vec<(ChainId, Vec<TokenDefinition>)> = Vec::new();
    let mut index: HashMap<ChainId, usize> = HashMap::new();

    for token in tokens {
        match index.get(&token.chain_id) {
            Some(&i) => groups[i].1.push(token.clone()),
            None => {
                index.insert(token.chain_id, groups.len());
                groups.push((token.chain_id, vec![token.clone()]));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;

    fn token(chain_id: ChainId, symbol: &str) -> TokenDefinition {
        TokenDefinition::new(chain_id, Address::ZERO, 18, symbol)
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_chain(&[]).is_empty());
    }

    #[test]
    fn groups_follow_first_appearance_order() {
        let tokens = vec![
            token(137, "a"),
            token(1, "b"),
            token(137, "c"),
            token(10, "d"),
            token(1, "e"),
        ];

        let groups = group_by_chain(&tokens);
        let chain_order: Vec<ChainId> = groups.iter().map(|(id, _)| *id).collect();
        assert_eq!(chain_order, vec![137, 1, 10]);
    }

    #[test]
    fn tokens_keep_input_order_within_group() {
        let tokens = vec![token(1, "first"), token(2, "x"), token(1, "second")];

        let groups = group_by_chain(&tokens);
        let symbols: Vec<&str> = groups[0].1.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["first", "second"]);
    }

    #[test]
    fn grouping_preserves_every_token() {
        let tokens = vec![token(1, "a"), token(2, "b"), token(1, "c"), token(3, "d")];

        let groups = group_by_chain(&tokens);
        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, tokens.len());
    }
}
