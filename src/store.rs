//! The recipe store: an immutable, ordered snapshot of recipes.
//!
//! Updates never mutate a store in place. [`RecipeStore::toggled`] builds a
//! new sequence in which one position holds a new record and every other
//! position shares its allocation with the previous snapshot. The runtime
//! then replaces its model with the new store.

use std::sync::Arc;

use thiserror::Error;

use crate::recipe::{demo_recipes, Flag, Recipe};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no recipe at index {index} (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStore {
    recipes: Vec<Arc<Recipe>>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().map(Arc::new).collect(),
        }
    }

    /// The six-recipe demonstration dataset.
    pub fn demo() -> Self {
        Self::new(demo_recipes())
    }

    pub fn recipes(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index).map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// A new store identical to this one except that `flag` is inverted on
    /// the recipe at `index`.
    pub fn toggled(&self, index: usize, flag: Flag) -> Result<Self, StoreError> {
        let target = self.recipes.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.recipes.len(),
        })?;
        let replacement = Arc::new(target.toggled(flag));

        let recipes = self
            .recipes
            .iter()
            .enumerate()
            .map(|(i, recipe)| {
                if i == index {
                    replacement.clone()
                } else {
                    recipe.clone()
                }
            })
            .collect();

        Ok(Self { recipes })
    }
}
