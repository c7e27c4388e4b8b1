//! Content value rendering.

use std::borrow::Cow;

use ncfilter_core::{FilterNode, ModuleResolver};

use crate::Result;

/// Rewrite every `prefix:name` in a value into `module:name`.
///
/// XML prefixes are local to the filter document while the datastore names
/// identities and instance identifiers by module, so `ift:ethernetCsmacd`
/// and `/t:top/t:users[t:name='x']` are both translated. Quoted literals
/// inside predicates are left alone.
///
/// The rewrite is all or nothing: if any prefix is undeclared, or bound to a
/// namespace no module owns, the value is returned unchanged.
pub(super) fn qualified_value<'v, R>(
    resolver: &R,
    leaf: &FilterNode,
    value: &'v str,
) -> Result<Cow<'v, str>>
where
    R: ModuleResolver + ?Sized,
{
    let mut rewrites: Vec<(usize, usize, &str)> = Vec::new();
    for (start, prefix) in PrefixScanner::new(value) {
        let Some(module) = leaf
            .resolve_prefix(prefix)
            .and_then(|namespace| resolver.resolve_by_namespace(namespace))
        else {
            return Ok(Cow::Borrowed(value));
        };
        rewrites.try_reserve(1)?;
        rewrites.push((start, start + prefix.len(), module));
    }

    if rewrites.is_empty() {
        return Ok(Cow::Borrowed(value));
    }

    let size = rewrites
        .iter()
        .fold(value.len(), |size, (start, end, module)| {
            size - (end - start) + module.len()
        });
    let mut qualified = String::new();
    qualified.try_reserve_exact(size)?;

    let mut copied = 0;
    for (start, end, module) in rewrites {
        qualified.push_str(&value[copied..start]);
        qualified.push_str(module);
        copied = end;
    }
    qualified.push_str(&value[copied..]);
    Ok(Cow::Owned(qualified))
}

/// Yields `(offset, prefix)` for each name directly followed by `:` and
/// another name.
struct PrefixScanner<'v> {
    value: &'v str,
    pos: usize,
    depth: usize,
    quote: Option<char>,
}

impl<'v> PrefixScanner<'v> {
    fn new(value: &'v str) -> Self {
        Self {
            value,
            pos: 0,
            depth: 0,
            quote: None,
        }
    }
}

impl<'v> Iterator for PrefixScanner<'v> {
    type Item = (usize, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value;
        while let Some(c) = value[self.pos..].chars().next() {
            let start = self.pos;
            self.pos += c.len_utf8();

            // Quotes only delimit literals inside predicates.
            if let Some(quote) = self.quote {
                if c == quote {
                    self.quote = None;
                }
                continue;
            }
            match c {
                '[' => self.depth += 1,
                ']' => self.depth = self.depth.saturating_sub(1),
                '\'' | '"' if self.depth > 0 => self.quote = Some(c),
                _ if is_name_start(c) => {
                    let name_len = value[start..]
                        .find(|c: char| !is_name_char(c))
                        .unwrap_or(value.len() - start);
                    self.pos = start + name_len;

                    let mut after = value[self.pos..].chars();
                    if after.next() == Some(':') && after.next().is_some_and(is_name_start) {
                        self.pos += 1;
                        return Some((start, &value[start..start + name_len]));
                    }
                }
                _ => {}
            }
        }
        None
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}
