//! Test support. `MemoryStore` is an in-memory stand-in for the Postgres
//! repositories, used by service and route tests; it mirrors the table
//! constraints from `migrations/`. The `insert_*` helpers seed rows for the
//! `#[sqlx::test]` repository tests.

use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use sqlx::PgPool;

use crate::api::error::{DbErrorMeta, SystemError};
use crate::modules::{
    category::{repository::CategoryRepository, schema::CategoryEntity},
    friend::{graph, model::canonical_pair, repository::FriendRepository, schema::FriendEntity},
    notification::{
        repository::NotificationRepository,
        schema::{NotificationEntity, NotificationMessageEntity},
    },
    recipe::{
        model::{
            InsertIngredient, InsertRecipe, InsertStep, UpdateIngredient, UpdateRecipe,
            UpdateStep,
        },
        repository::{RecipeIngredientRepository, RecipeRepository, RecipeStepRepository},
        schema::{RecipeEntity, RecipeIngredientEntity, RecipeStepEntity},
    },
    recipe_list::{
        model::{InsertRecipeList, UpdateRecipeList},
        repository::RecipeListRepository,
        schema::RecipeListEntity,
    },
    user::{
        model::{InsertUser, UpdateUser},
        repository::UserRepository,
        schema::{PrivacyLevel, PublicUser, UserEntity},
    },
};

pub async fn insert_users(pool: &PgPool, usernames: &[&str]) {
    for username in usernames {
        sqlx::query("INSERT INTO users (username, email, full_name) VALUES ($1, $2, $3)")
            .bind(*username)
            .bind(format!("{username}@example.com"))
            .bind(format!("{username} Example"))
            .execute(pool)
            .await
            .unwrap();
    }
}

pub async fn insert_recipe(pool: &PgPool, username: &str, recipe_name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO recipes (recipe_name, username) VALUES ($1, $2) RETURNING recipe_id")
        .bind(recipe_name)
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[derive(Default)]
struct State {
    users: BTreeMap<String, UserEntity>,
    friends: BTreeMap<(String, String), FriendEntity>,
    recipes: BTreeMap<i32, RecipeEntity>,
    ingredients: BTreeMap<i32, RecipeIngredientEntity>,
    steps: BTreeMap<(i32, i32), RecipeStepEntity>,
    categories: BTreeSet<String>,
    recipe_categories: BTreeSet<(String, i32)>,
    lists: BTreeMap<i32, RecipeListEntity>,
    list_entries: BTreeSet<(i32, i32)>,
    messages: BTreeMap<(String, DateTime<Utc>), NotificationMessageEntity>,
    notifications: BTreeMap<i32, NotificationEntity>,
    last_id: i32,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    update_calls: AtomicUsize,
    recipe_exists_calls: AtomicUsize,
}

fn conflict(constraint: &str) -> SystemError {
    SystemError::Conflict(Some(DbErrorMeta {
        code: Some("23505".into()),
        constraint: Some(constraint.into()),
        message: "duplicate key value violates unique constraint".into(),
    }))
}

fn missing_reference() -> SystemError {
    SystemError::not_found("Referenced resource not found")
}

impl MemoryStore {
    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn seed_user(&self, username: &str) {
        self.state().users.insert(
            username.to_string(),
            UserEntity {
                username: username.to_string(),
                profile_picture: None,
                email: format!("{username}@example.com"),
                full_name: format!("{username} Example"),
                default_privacy_level: PrivacyLevel::Private,
            },
        );
    }

    pub fn seed_recipe(&self, username: &str, recipe_name: &str) -> i32 {
        let mut state = self.state();
        let recipe_id = state.next_id();
        state.recipes.insert(
            recipe_id,
            RecipeEntity {
                recipe_id,
                recipe_name: recipe_name.to_string(),
                privacy_level: PrivacyLevel::Private,
                username: username.to_string(),
            },
        );
        recipe_id
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn recipe_exists_calls(&self) -> usize {
        self.recipe_exists_calls.load(Ordering::SeqCst)
    }

    pub fn friendship_count(&self) -> usize {
        self.state().friends.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.state().recipes.len()
    }

    pub fn ingredient_count(&self) -> usize {
        self.state().ingredients.len()
    }

    fn count_update(&self) {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl UserRepository for MemoryStore {
    async fn exists(&self, username: &str) -> Result<bool, SystemError> {
        Ok(self.state().users.contains_key(username))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>, SystemError> {
        Ok(self.state().users.get(username).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UserEntity>, SystemError> {
        Ok(self.state().users.values().cloned().collect())
    }

    async fn find_public(&self) -> Result<Vec<PublicUser>, SystemError> {
        Ok(self
            .state()
            .users
            .values()
            .filter(|u| u.default_privacy_level == PrivacyLevel::Public)
            .cloned()
            .map(PublicUser::from)
            .collect())
    }

    async fn create(&self, user: &InsertUser) -> Result<bool, SystemError> {
        let mut state = self.state();
        if state.users.contains_key(&user.username) {
            return Err(conflict("pk_users_username"));
        }
        state.users.insert(
            user.username.clone(),
            UserEntity {
                username: user.username.clone(),
                profile_picture: user.profile_picture.clone(),
                email: user.email.clone(),
                full_name: user.full_name.clone(),
                default_privacy_level: user.default_privacy_level,
            },
        );
        Ok(true)
    }

    async fn update(&self, username: &str, user: &UpdateUser) -> Result<bool, SystemError> {
        self.count_update();
        let mut state = self.state();
        let Some(row) = state.users.get_mut(username) else {
            return Ok(false);
        };
        if let Some(picture) = &user.profile_picture {
            row.profile_picture = picture.clone();
        }
        if let Some(email) = &user.email {
            row.email = email.clone();
        }
        if let Some(full_name) = &user.full_name {
            row.full_name = full_name.clone();
        }
        if let Some(level) = user.default_privacy_level {
            row.default_privacy_level = level;
        }
        Ok(true)
    }

    async fn delete(&self, username: &str) -> Result<bool, SystemError> {
        let mut state = self.state();
        let removed = state.users.remove(username).is_some();
        state.friends.retain(|(a, b), _| a != username && b != username);
        Ok(removed)
    }
}

#[async_trait::async_trait]
impl FriendRepository for MemoryStore {
    async fn find_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<Option<FriendEntity>, SystemError> {
        let (a, b) = canonical_pair(username_a, username_b);
        Ok(self.state().friends.get(&(a.to_string(), b.to_string())).cloned())
    }

    async fn find_friends(&self, username: &str) -> Result<Vec<UserEntity>, SystemError> {
        let state = self.state();
        let mut friends: Vec<UserEntity> = state
            .friends
            .keys()
            .filter_map(|(a, b)| match (a == username, b == username) {
                (true, _) => Some(b),
                (_, true) => Some(a),
                _ => None,
            })
            .filter_map(|name| state.users.get(name).cloned())
            .collect();
        friends.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(friends)
    }

    async fn find_friends_with_everyone(&self) -> Result<Vec<UserEntity>, SystemError> {
        let state = self.state();
        let everyone = graph::friends_with_everyone(
            state.users.keys().map(String::as_str),
            state.friends.keys().map(|(a, b)| (a.as_str(), b.as_str())),
        );
        let users = everyone.into_iter().filter_map(|name| state.users.get(name).cloned()).collect();
        Ok(users)
    }

    async fn create_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<bool, SystemError> {
        let (a, b) = canonical_pair(username_a, username_b);
        let mut state = self.state();
        if !state.users.contains_key(a) || !state.users.contains_key(b) {
            return Err(missing_reference());
        }
        let key = (a.to_string(), b.to_string());
        if state.friends.contains_key(&key) {
            return Err(conflict("pk_friends_friendship"));
        }
        state.friends.insert(
            key,
            FriendEntity { username1: a.to_string(), username2: b.to_string(), created_at: Utc::now() },
        );
        Ok(true)
    }

    async fn delete_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<bool, SystemError> {
        let (a, b) = canonical_pair(username_a, username_b);
        Ok(self.state().friends.remove(&(a.to_string(), b.to_string())).is_some())
    }
}

#[async_trait::async_trait]
impl RecipeRepository for MemoryStore {
    async fn exists(&self, recipe_id: i32) -> Result<bool, SystemError> {
        self.recipe_exists_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.state().recipes.contains_key(&recipe_id))
    }

    async fn find_by_id(&self, recipe_id: i32) -> Result<Option<RecipeEntity>, SystemError> {
        Ok(self.state().recipes.get(&recipe_id).cloned())
    }

    async fn find_by_owner(&self, username: &str) -> Result<Vec<RecipeEntity>, SystemError> {
        Ok(self.state().recipes.values().filter(|r| r.username == username).cloned().collect())
    }

    async fn find_public(&self) -> Result<Vec<RecipeEntity>, SystemError> {
        Ok(self
            .state()
            .recipes
            .values()
            .filter(|r| r.privacy_level == PrivacyLevel::Public)
            .cloned()
            .collect())
    }

    async fn create(&self, recipe: &InsertRecipe) -> Result<i32, SystemError> {
        let mut state = self.state();
        if !state.users.contains_key(&recipe.username) {
            return Err(missing_reference());
        }
        let recipe_id = state.next_id();
        state.recipes.insert(
            recipe_id,
            RecipeEntity {
                recipe_id,
                recipe_name: recipe.recipe_name.clone(),
                privacy_level: recipe.privacy_level,
                username: recipe.username.clone(),
            },
        );
        Ok(recipe_id)
    }

    async fn update(&self, recipe_id: i32, recipe: &UpdateRecipe) -> Result<bool, SystemError> {
        self.count_update();
        let mut state = self.state();
        let Some(row) = state.recipes.get_mut(&recipe_id) else {
            return Ok(false);
        };
        if let Some(name) = &recipe.recipe_name {
            row.recipe_name = name.clone();
        }
        if let Some(level) = recipe.privacy_level {
            row.privacy_level = level;
        }
        Ok(true)
    }

    async fn delete(&self, recipe_id: i32) -> Result<bool, SystemError> {
        let mut state = self.state();
        let removed = state.recipes.remove(&recipe_id).is_some();
        state.ingredients.retain(|_, i| i.recipe_id != recipe_id);
        state.steps.retain(|(id, _), _| *id != recipe_id);
        state.recipe_categories.retain(|(_, id)| *id != recipe_id);
        state.list_entries.retain(|(_, id)| *id != recipe_id);
        Ok(removed)
    }
}

#[async_trait::async_trait]
impl RecipeIngredientRepository for MemoryStore {
    async fn find_ingredients(
        &self,
        recipe_id: i32,
    ) -> Result<Vec<RecipeIngredientEntity>, SystemError> {
        Ok(self.state().ingredients.values().filter(|i| i.recipe_id == recipe_id).cloned().collect())
    }

    async fn create_ingredient(&self, ingredient: &InsertIngredient) -> Result<i32, SystemError> {
        let mut state = self.state();
        if !state.recipes.contains_key(&ingredient.recipe_id) {
            return Err(missing_reference());
        }
        let recipe_ingredient_id = state.next_id();
        state.ingredients.insert(
            recipe_ingredient_id,
            RecipeIngredientEntity {
                recipe_ingredient_id,
                recipe_ingredient_name: ingredient.recipe_ingredient_name.clone(),
                recipe_id: ingredient.recipe_id,
                amount: ingredient.amount,
                unit_of_measurement: ingredient.unit_of_measurement.clone(),
            },
        );
        Ok(recipe_ingredient_id)
    }

    async fn update_ingredient(
        &self,
        ingredient_id: i32,
        ingredient: &UpdateIngredient,
    ) -> Result<bool, SystemError> {
        self.count_update();
        let mut state = self.state();
        let Some(row) = state.ingredients.get_mut(&ingredient_id) else {
            return Ok(false);
        };
        if let Some(name) = &ingredient.recipe_ingredient_name {
            row.recipe_ingredient_name = name.clone();
        }
        if let Some(amount) = ingredient.amount {
            row.amount = amount;
        }
        if let Some(unit) = &ingredient.unit_of_measurement {
            row.unit_of_measurement = unit.clone();
        }
        Ok(true)
    }

    async fn delete_ingredient(&self, ingredient_id: i32) -> Result<bool, SystemError> {
        Ok(self.state().ingredients.remove(&ingredient_id).is_some())
    }
}

#[async_trait::async_trait]
impl RecipeStepRepository for MemoryStore {
    async fn find_steps(&self, recipe_id: i32) -> Result<Vec<RecipeStepEntity>, SystemError> {
        Ok(self
            .state()
            .steps
            .range((recipe_id, i32::MIN)..=(recipe_id, i32::MAX))
            .map(|(_, step)| step.clone())
            .collect())
    }

    async fn create_step(&self, step: &InsertStep) -> Result<bool, SystemError> {
        let mut state = self.state();
        if !state.recipes.contains_key(&step.recipe_id) {
            return Err(missing_reference());
        }
        let key = (step.recipe_id, step.step_number);
        if state.steps.contains_key(&key) {
            return Err(conflict("pk_recipe_steps_step"));
        }
        state.steps.insert(
            key,
            RecipeStepEntity {
                recipe_id: step.recipe_id,
                step_number: step.step_number,
                step_information: step.step_information.clone(),
            },
        );
        Ok(true)
    }

    async fn update_step(
        &self,
        recipe_id: i32,
        step_number: i32,
        step: &UpdateStep,
    ) -> Result<bool, SystemError> {
        self.count_update();
        let mut state = self.state();
        let Some(row) = state.steps.get_mut(&(recipe_id, step_number)) else {
            return Ok(false);
        };
        if let Some(information) = &step.step_information {
            row.step_information = information.clone();
        }
        Ok(true)
    }

    async fn delete_step(&self, recipe_id: i32, step_number: i32) -> Result<bool, SystemError> {
        Ok(self.state().steps.remove(&(recipe_id, step_number)).is_some())
    }
}

#[async_trait::async_trait]
impl CategoryRepository for MemoryStore {
    async fn category_exists(&self, category_name: &str) -> Result<bool, SystemError> {
        Ok(self.state().categories.contains(category_name))
    }

    async fn find_categories(&self) -> Result<Vec<CategoryEntity>, SystemError> {
        Ok(self
            .state()
            .categories
            .iter()
            .map(|name| CategoryEntity { category_name: name.clone() })
            .collect())
    }

    async fn create_category(&self, category_name: &str) -> Result<bool, SystemError> {
        if !self.state().categories.insert(category_name.to_string()) {
            return Err(conflict("pk_categories_category"));
        }
        Ok(true)
    }

    async fn delete_category(&self, category_name: &str) -> Result<bool, SystemError> {
        let mut state = self.state();
        state.recipe_categories.retain(|(name, _)| name != category_name);
        Ok(state.categories.remove(category_name))
    }

    async fn find_category_recipes(
        &self,
        category_name: &str,
    ) -> Result<Vec<RecipeEntity>, SystemError> {
        let state = self.state();
        let recipes = state
            .recipe_categories
            .iter()
            .filter(|(name, _)| name == category_name)
            .filter_map(|(_, id)| state.recipes.get(id).cloned())
            .collect();
        Ok(recipes)
    }

    async fn link_recipe(&self, category_name: &str, recipe_id: i32) -> Result<bool, SystemError> {
        let mut state = self.state();
        if !state.categories.contains(category_name) || !state.recipes.contains_key(&recipe_id) {
            return Err(missing_reference());
        }
        if !state.recipe_categories.insert((category_name.to_string(), recipe_id)) {
            return Err(conflict("pk_recipe_categories_link"));
        }
        Ok(true)
    }

    async fn unlink_recipe(&self, category_name: &str, recipe_id: i32) -> Result<bool, SystemError> {
        Ok(self.state().recipe_categories.remove(&(category_name.to_string(), recipe_id)))
    }
}

#[async_trait::async_trait]
impl RecipeListRepository for MemoryStore {
    async fn list_exists(&self, list_id: i32) -> Result<bool, SystemError> {
        Ok(self.state().lists.contains_key(&list_id))
    }

    async fn find_lists_by_owner(&self, username: &str) -> Result<Vec<RecipeListEntity>, SystemError> {
        Ok(self.state().lists.values().filter(|l| l.username == username).cloned().collect())
    }

    async fn create_list(&self, list: &InsertRecipeList) -> Result<i32, SystemError> {
        let mut state = self.state();
        if !state.users.contains_key(&list.username) {
            return Err(missing_reference());
        }
        let recipe_list_id = state.next_id();
        state.lists.insert(
            recipe_list_id,
            RecipeListEntity {
                recipe_list_id,
                recipe_list_name: list.recipe_list_name.clone(),
                username: list.username.clone(),
            },
        );
        Ok(recipe_list_id)
    }

    async fn update_list(&self, list_id: i32, list: &UpdateRecipeList) -> Result<bool, SystemError> {
        self.count_update();
        let mut state = self.state();
        let Some(row) = state.lists.get_mut(&list_id) else {
            return Ok(false);
        };
        if let Some(name) = &list.recipe_list_name {
            row.recipe_list_name = name.clone();
        }
        Ok(true)
    }

    async fn delete_list(&self, list_id: i32) -> Result<bool, SystemError> {
        let mut state = self.state();
        state.list_entries.retain(|(id, _)| *id != list_id);
        Ok(state.lists.remove(&list_id).is_some())
    }

    async fn find_list_recipes(&self, list_id: i32) -> Result<Vec<RecipeEntity>, SystemError> {
        let state = self.state();
        let recipes = state
            .list_entries
            .iter()
            .filter(|(id, _)| *id == list_id)
            .filter_map(|(_, recipe_id)| state.recipes.get(recipe_id).cloned())
            .collect();
        Ok(recipes)
    }

    async fn add_entry(&self, list_id: i32, recipe_id: i32) -> Result<bool, SystemError> {
        let mut state = self.state();
        if !state.lists.contains_key(&list_id) || !state.recipes.contains_key(&recipe_id) {
            return Err(missing_reference());
        }
        if !state.list_entries.insert((list_id, recipe_id)) {
            return Err(conflict("pk_recipe_list_entries_entry"));
        }
        Ok(true)
    }

    async fn remove_entry(&self, list_id: i32, recipe_id: i32) -> Result<bool, SystemError> {
        Ok(self.state().list_entries.remove(&(list_id, recipe_id)))
    }
}

#[async_trait::async_trait]
impl NotificationRepository for MemoryStore {
    async fn find_messages(
        &self,
        username: &str,
    ) -> Result<Vec<NotificationMessageEntity>, SystemError> {
        Ok(self
            .state()
            .messages
            .values()
            .rev()
            .filter(|m| m.username == username)
            .cloned()
            .collect())
    }

    async fn create_message(
        &self,
        username: &str,
        message_text: &str,
    ) -> Result<NotificationMessageEntity, SystemError> {
        let mut state = self.state();
        if !state.users.contains_key(username) {
            return Err(missing_reference());
        }
        // keep keys unique when two messages land within the clock resolution
        let latest = state
            .messages
            .values()
            .filter(|m| m.username == username)
            .map(|m| m.date_and_time_sent)
            .max();
        let mut sent_at = Utc::now();
        if let Some(latest) = latest.filter(|latest| *latest >= sent_at) {
            sent_at = latest + Duration::microseconds(1);
        }
        let message = NotificationMessageEntity {
            username: username.to_string(),
            date_and_time_sent: sent_at,
            message_text: message_text.to_string(),
        };
        state.messages.insert((username.to_string(), sent_at), message.clone());
        Ok(message)
    }

    async fn delete_message(
        &self,
        username: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<bool, SystemError> {
        let mut state = self.state();
        state.notifications.retain(|_, n| !(n.username == username && n.date_and_time_sent == sent_at));
        Ok(state.messages.remove(&(username.to_string(), sent_at)).is_some())
    }

    async fn find_notifications(
        &self,
        username: &str,
    ) -> Result<Vec<NotificationEntity>, SystemError> {
        Ok(self
            .state()
            .notifications
            .values()
            .rev()
            .filter(|n| n.username == username)
            .cloned()
            .collect())
    }

    async fn create_notification(&self, username: &str) -> Result<Option<i32>, SystemError> {
        let mut state = self.state();
        let latest = state
            .messages
            .values()
            .filter(|m| m.username == username)
            .map(|m| m.date_and_time_sent)
            .max();
        let Some(date_and_time_sent) = latest else {
            return Ok(None);
        };
        let notification_id = state.next_id();
        state.notifications.insert(
            notification_id,
            NotificationEntity { notification_id, username: username.to_string(), date_and_time_sent },
        );
        Ok(Some(notification_id))
    }

    async fn delete_notification(&self, notification_id: i32) -> Result<bool, SystemError> {
        Ok(self.state().notifications.remove(&notification_id).is_some())
    }
}
