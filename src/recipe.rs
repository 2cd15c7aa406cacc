//! Recipe and ingredient records plus the built-in demonstration data.

/// Opaque handle to an image resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRes(pub &'static str);

/// The single image every demonstration recipe uses.
pub const RECIPE_IMAGE: ImageRes = ImageRes("recipe_image");

/// One of the three independent UI flags carried by a [`Recipe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// The meal has been added to the plan.
    Selected,
    Favourite,
    /// The ingredient panel is visible.
    Expanded,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::Selected, Flag::Favourite, Flag::Expanded];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub image: ImageRes,
    pub is_selected: bool,
    pub is_favourite: bool,
    pub is_expanded: bool,
}

impl Recipe {
    /// A recipe with every flag cleared.
    pub fn new(title: impl Into<String>, description: impl Into<String>, image: ImageRes) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image,
            is_selected: false,
            is_favourite: false,
            is_expanded: false,
        }
    }

    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Selected => self.is_selected,
            Flag::Favourite => self.is_favourite,
            Flag::Expanded => self.is_expanded,
        }
    }

    /// A copy of this recipe with `flag` inverted and everything else kept.
    pub fn toggled(&self, flag: Flag) -> Self {
        let mut next = self.clone();
        match flag {
            Flag::Selected => next.is_selected = !next.is_selected,
            Flag::Favourite => next.is_favourite = !next.is_favourite,
            Flag::Expanded => next.is_expanded = !next.is_expanded,
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub item: &'static str,
    /// Free-form amount, e.g. `"400 g"` or `"3"`.
    pub quantity: &'static str,
}

impl Ingredient {
    pub const fn new(item: &'static str, quantity: &'static str) -> Self {
        Self { item, quantity }
    }
}

// The panel content is shared by every recipe rather than stored per record.
const DEMO_INGREDIENTS: [Ingredient; 5] = [
    Ingredient::new("Beef", "400 g"),
    Ingredient::new("Carrot", "1"),
    Ingredient::new("Onion", "3"),
    Ingredient::new("Potato", "4"),
    Ingredient::new("Tomato paste", "2 sp"),
];

/// The ingredient list shown by any expanded card.
pub fn demo_ingredients() -> Vec<Ingredient> {
    DEMO_INGREDIENTS.to_vec()
}

pub const DEMO_RECIPE_COUNT: usize = 6;

/// Six recipes named `Recipe name 1` to `Recipe name 6`, all flags cleared.
pub fn demo_recipes() -> Vec<Recipe> {
    (1..=DEMO_RECIPE_COUNT)
        .map(|n| Recipe::new(format!("Recipe name {n}"), format!("Description {n}"), RECIPE_IMAGE))
        .collect()
}
