//! Ordered and dominant trees represented by level sequences

use crate::combinat::Multiset;
use crate::functions::Endofunction;
use crate::{Result, StructureError};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered rooted tree represented by its level sequence
///
/// - The sequence lists each node's level in depth-first preorder
/// - The first entry is the root's level; every other entry is above it
/// - Each node hangs from the most recent node one level below it, so no
///   entry exceeds its predecessor by more than one
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct OrderedTree {
    levels: Vec<usize>,
}

impl OrderedTree {
    /// Create a tree from a level sequence, checking that it describes a
    /// single rooted tree
    pub fn new(levels: Vec<usize>) -> Result<Self> {
        let Some(&root) = levels.first() else {
            return Err(StructureError::MalformedLevelSequence(
                "empty level sequence".to_string(),
            ));
        };
        for (node, pair) in levels.windows(2).enumerate() {
            let (prev, level) = (pair[0], pair[1]);
            if level <= root {
                return Err(StructureError::MalformedLevelSequence(format!(
                    "node {} at level {} is not above the root level {}",
                    node + 1,
                    level,
                    root
                )));
            }
            if level > prev + 1 {
                return Err(StructureError::MalformedLevelSequence(format!(
                    "node {} jumps from level {} to level {}",
                    node + 1,
                    prev,
                    level
                )));
            }
        }
        Ok(OrderedTree { levels })
    }

    /// Wrap a sequence already known to be valid
    pub(crate) fn from_valid(levels: Vec<usize>) -> Self {
        OrderedTree { levels }
    }

    /// A lone root at the given level
    pub fn singleton(root_level: usize) -> Self {
        OrderedTree {
            levels: vec![root_level],
        }
    }

    /// The level sequence
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// Level of the root node
    pub fn root_level(&self) -> usize {
        self.levels[0]
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: every tree has a root
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Distance from the root to the deepest node
    pub fn height(&self) -> usize {
        self.levels.iter().max().copied().unwrap_or(0) - self.root_level()
    }

    /// The main branches of the tree, keeping their levels
    pub fn branches(&self) -> impl Iterator<Item = OrderedTree> + '_ {
        Branches::new(&self.levels).map(|branch| OrderedTree::from_valid(branch.to_vec()))
    }

    /// The main branches, each moved down so its root sits at this tree's root level
    pub fn subtrees(&self) -> impl Iterator<Item = OrderedTree> + '_ {
        Branches::new(&self.levels).map(|branch| OrderedTree::from_valid(lowered(branch)))
    }

    /// Multiset of the subtrees attached to the root
    pub fn chop(&self) -> Multiset<OrderedTree> {
        self.subtrees().collect()
    }

    /// The same tree with its root placed at `root_level`
    pub fn rebased(&self, root_level: usize) -> OrderedTree {
        OrderedTree::from_valid(rebase(&self.levels, root_level))
    }

    /// Parent map of the tree: node i is sent to its parent and the root
    /// (node 0) to itself
    pub fn labelled_func(&self) -> Vec<usize> {
        let root = self.root_level();
        // grafting[d] is the most recent node found at depth d
        let mut grafting = vec![0; self.height() + 1];
        let mut func = Vec::with_capacity(self.len());
        for (node, &level) in self.levels.iter().enumerate() {
            let depth = level - root;
            func.push(if depth == 0 { 0 } else { grafting[depth - 1] });
            grafting[depth] = node;
        }
        func
    }

    /// The tree as an endofunction whose single fixed point is the root
    pub fn to_endofunction(&self) -> Endofunction {
        Endofunction::from_valid(self.labelled_func())
    }

    /// The dominant ordering of the same unordered tree
    pub fn canonical(&self) -> DominantTree {
        DominantTree(OrderedTree::from_valid(dominant_levels(&self.levels)))
    }
}

/// Iterator over the main branches of a level sequence
struct Branches<'a> {
    rest: &'a [usize],
    child_level: usize,
}

impl<'a> Branches<'a> {
    fn new(levels: &'a [usize]) -> Self {
        Branches {
            rest: &levels[1..],
            child_level: levels[0] + 1,
        }
    }
}

impl<'a> Iterator for Branches<'a> {
    type Item = &'a [usize];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self.rest[1..]
            .iter()
            .position(|&level| level == self.child_level)
            .map_or(self.rest.len(), |pos| pos + 1);
        let (branch, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(branch)
    }
}

fn lowered(levels: &[usize]) -> Vec<usize> {
    levels.iter().map(|&level| level - 1).collect()
}

fn rebase(levels: &[usize], root_level: usize) -> Vec<usize> {
    let root = levels[0];
    levels.iter().map(|&level| level - root + root_level).collect()
}

/// Canonicalize the branches bottom-up and order them descending
///
/// Nodes are ranked one depth at a time, deepest first. A node's key is the
/// descending list of its children's ranks, and comparing keys agrees with
/// comparing the dominant level sequences of the subtrees, since every child
/// block starts with the only occurrence of its level.
fn dominant_levels(levels: &[usize]) -> Vec<usize> {
    let root = levels[0];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); levels.len()];
    let mut by_depth: Vec<Vec<usize>> = Vec::new();
    let mut path: Vec<usize> = Vec::new();
    for (node, &level) in levels.iter().enumerate() {
        let depth = level - root;
        path.truncate(depth);
        if let Some(&parent) = path.last() {
            children[parent].push(node);
        }
        path.push(node);
        if by_depth.len() == depth {
            by_depth.push(Vec::new());
        }
        by_depth[depth].push(node);
    }

    let mut rank = vec![0; levels.len()];
    for nodes in by_depth.iter().rev() {
        let mut keyed: Vec<(Vec<usize>, usize)> = nodes
            .iter()
            .map(|&node| {
                let kids = &mut children[node];
                kids.sort_by(|&a, &b| rank[b].cmp(&rank[a]));
                (kids.iter().map(|&kid| rank[kid]).collect(), node)
            })
            .collect();
        keyed.sort_unstable();
        let mut current = 0;
        for i in 0..keyed.len() {
            if i > 0 && keyed[i].0 != keyed[i - 1].0 {
                current += 1;
            }
            rank[keyed[i].1] = current;
        }
    }

    let mut result = Vec::with_capacity(levels.len());
    let mut stack = vec![0];
    while let Some(node) = stack.pop() {
        result.push(levels[node]);
        stack.extend(children[node].iter().rev());
    }
    result
}

impl TryFrom<Vec<usize>> for OrderedTree {
    type Error = StructureError;

    fn try_from(levels: Vec<usize>) -> Result<Self> {
        OrderedTree::new(levels)
    }
}

impl From<OrderedTree> for Vec<usize> {
    fn from(tree: OrderedTree) -> Self {
        tree.levels
    }
}

impl fmt::Debug for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderedTree{:?}", self.levels)
    }
}

/// Draws the tree as an indented outline, one node per line
impl fmt::Display for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.root_level();
        for (node, &level) in self.levels.iter().enumerate() {
            for _ in root..level {
                write!(f, "  ")?;
            }
            writeln!(f, "● {}", node)?;
        }
        Ok(())
    }
}

/// The canonical ordering of an unordered rooted tree: among all level
/// sequences describing the same shape, the lexicographically greatest
///
/// Its branches are themselves dominant and appear in descending order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct DominantTree(OrderedTree);

impl DominantTree {
    /// Validate a level sequence and put it in dominant form
    pub fn new(levels: Vec<usize>) -> Result<Self> {
        Ok(OrderedTree::new(levels)?.canonical())
    }

    /// Wrap a level sequence that is already valid and dominant
    pub(crate) fn preordered(levels: Vec<usize>) -> Self {
        DominantTree(OrderedTree::from_valid(levels))
    }

    /// A lone root at the given level
    pub fn singleton(root_level: usize) -> Self {
        DominantTree(OrderedTree::singleton(root_level))
    }

    /// The underlying ordered tree
    pub fn as_ordered(&self) -> &OrderedTree {
        &self.0
    }

    /// The level sequence
    pub fn levels(&self) -> &[usize] {
        self.0.levels()
    }

    /// Level of the root node
    pub fn root_level(&self) -> usize {
        self.0.root_level()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: every tree has a root
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distance from the root to the deepest node
    pub fn height(&self) -> usize {
        self.0.height()
    }

    /// The main branches, in descending order; they are dominant by construction
    pub fn branches(&self) -> impl Iterator<Item = DominantTree> + '_ {
        Branches::new(self.levels()).map(|branch| DominantTree::preordered(branch.to_vec()))
    }

    /// The main branches moved down to this tree's root level
    pub fn subtrees(&self) -> impl Iterator<Item = DominantTree> + '_ {
        Branches::new(self.levels()).map(|branch| DominantTree::preordered(lowered(branch)))
    }

    /// Multiset of the subtrees attached to the root
    pub fn chop(&self) -> Multiset<DominantTree> {
        self.subtrees().collect()
    }

    /// The same tree with its root placed at `root_level`
    pub fn rebased(&self, root_level: usize) -> DominantTree {
        DominantTree(self.0.rebased(root_level))
    }

    /// Number of labellings of the nodes that give the same labelled tree:
    /// the degeneracy of the multiset of subtrees times the degeneracy of
    /// every subtree
    pub fn degeneracy(&self) -> BigUint {
        let subtrees = self.chop();
        subtrees
            .iter()
            .fold(subtrees.degeneracy(), |deg, (tree, &mult)| {
                deg * num_traits::pow(tree.degeneracy(), mult)
            })
    }

    /// Parent map of the tree with the root fixed at node 0
    pub fn labelled_func(&self) -> Vec<usize> {
        self.0.labelled_func()
    }

    /// The tree as an endofunction whose single fixed point is the root
    pub fn to_endofunction(&self) -> Endofunction {
        self.0.to_endofunction()
    }

    /// Unwrap into the underlying ordered tree
    pub fn into_ordered(self) -> OrderedTree {
        self.0
    }
}

impl From<OrderedTree> for DominantTree {
    fn from(tree: OrderedTree) -> Self {
        tree.canonical()
    }
}

impl From<&OrderedTree> for DominantTree {
    fn from(tree: &OrderedTree) -> Self {
        tree.canonical()
    }
}

impl TryFrom<Vec<usize>> for DominantTree {
    type Error = StructureError;

    fn try_from(levels: Vec<usize>) -> Result<Self> {
        DominantTree::new(levels)
    }
}

impl From<DominantTree> for Vec<usize> {
    fn from(tree: DominantTree) -> Self {
        tree.0.levels
    }
}

impl fmt::Debug for DominantTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DominantTree{:?}", self.levels())
    }
}

impl fmt::Display for DominantTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
