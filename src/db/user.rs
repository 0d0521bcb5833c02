use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::RUserUpdate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, NotSet, QueryFilter, Set,
};

impl DatabaseService {
    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find().all(&self.db).await?)
    }

    pub async fn find_user_by_id(&self, id: i32) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Insert a new user. The store assigns the id; the creation instant is
    /// fixed here, exactly once.
    pub async fn insert_user(&self, name: String, email: String) -> Result<UserModel, AppError> {
        let user = UserActive {
            id: NotSet,
            name: Set(name),
            email: Set(email),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?;
        log::info!("created user {}", user.id);
        Ok(user)
    }

    /// Merge the supplied fields onto the stored row. Absent fields stay as
    /// they are; `id` and `created_at` are never part of the merge.
    pub async fn update_user(
        &self,
        user: UserModel,
        update: RUserUpdate,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = user.into();
        if let Some(name) = update.name {
            am.name = Set(name);
        }
        if let Some(email) = update.email {
            am.email = Set(email);
        }
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_user(&self, user: UserModel) -> Result<(), AppError> {
        let id = user.id;
        user.delete(&self.db).await?;
        log::info!("deleted user {}", id);
        Ok(())
    }
}
