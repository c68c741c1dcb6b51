use std::fmt;

use super::GroupView;

/// Renders a subtree as indented text, one group per line:
///
/// ```text
/// L-- gen.0(1)
///     |-- gen.0.0(0)
///     L-- gen.0.1(2)
/// ```
///
/// The number in parentheses is the group's own instance count.
pub struct TreeDisplay<'a> {
    top: GroupView<'a>,
}

impl<'a> TreeDisplay<'a> {
    pub fn new(top: GroupView<'a>) -> Self {
        Self { top }
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (group, prefix, is last sibling)
        let mut stack = vec![(self.top, String::new(), true)];
        while let Some((view, prefix, tail)) = stack.pop() {
            let branch = if tail { "L-- " } else { "|-- " };
            writeln!(f, "{prefix}{branch}{}({})", view.id(), view.instances().len())?;

            let child_prefix = format!("{prefix}{}", if tail { "    " } else { "|   " });
            let children: Vec<_> = view.children().collect();
            let last = children.len().saturating_sub(1);
            for (position, child) in children.into_iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), position == last));
            }
        }
        Ok(())
    }
}
