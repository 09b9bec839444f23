use anyhow::Context as _;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use attendance_api_schema::{user_otps, user_students, users};

use crate::domain::repository::{OtpRepository, ProfileRepository, UserRepository};
use crate::domain::resources::{StudentRecord, Students};
use crate::domain::types::{OtpRecord, ProfileUpdate, User};
use crate::error::ApiError;
use crate::infra::resources::SeaResource;

/// Map an insert failure: constraint violations are client errors, anything
/// else is a storage failure carrying `what` as context.
pub(crate) fn insert_error(err: DbErr, what: &'static str) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::Conflict,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ApiError::DanglingReference,
        _ => ApiError::Storage(anyhow::Error::new(err).context(what)),
    }
}

// ── OTP repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn create(&self, otp: &OtpRecord) -> Result<(), ApiError> {
        user_otps::ActiveModel {
            id: Set(otp.id),
            mobile: Set(otp.mobile.clone()),
            code: Set(otp.code.clone()),
            is_used: Set(otp.is_used),
            expires_at: Set(otp.expires_at),
            created_at: Set(otp.created_at),
        }
        .insert(&self.db)
        .await
        .context("create otp")?;
        Ok(())
    }

    async fn find_latest_by_mobile(&self, mobile: &str) -> Result<Option<OtpRecord>, ApiError> {
        let model = user_otps::Entity::find()
            .filter(user_otps::Column::Mobile.eq(mobile))
            .order_by_desc(user_otps::Column::CreatedAt)
            .order_by_desc(user_otps::Column::Id)
            .one(&self.db)
            .await
            .context("find latest otp by mobile")?;
        Ok(model.map(otp_from_model))
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, ApiError> {
        let res = user_otps::Entity::update_many()
            .col_expr(user_otps::Column::IsUsed, Expr::value(true))
            .filter(user_otps::Column::Id.eq(id))
            .filter(user_otps::Column::IsUsed.eq(false))
            .exec(&self.db)
            .await
            .context("mark otp used")?;
        Ok(res.rows_affected == 1)
    }

    async fn invalidate_outstanding(&self, mobile: &str) -> Result<u64, ApiError> {
        let res = user_otps::Entity::update_many()
            .col_expr(user_otps::Column::IsUsed, Expr::value(true))
            .filter(user_otps::Column::Mobile.eq(mobile))
            .filter(user_otps::Column::IsUsed.eq(false))
            .exec(&self.db)
            .await
            .context("invalidate outstanding otps")?;
        Ok(res.rows_affected)
    }
}

fn otp_from_model(m: user_otps::Model) -> OtpRecord {
    OtpRecord {
        id: m.id,
        mobile: m.mobile,
        code: m.code,
        is_used: m.is_used,
        expires_at: m.expires_at,
        created_at: m.created_at,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Mobile.eq(mobile))
            .one(&self.db)
            .await
            .context("find user by mobile")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            mobile: Set(user.mobile.clone()),
            login_hash: Set(None),
            password: Set(None),
            is_active: Set(user.is_active),
            created_at: Set(user.created_at),
            updated_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| insert_error(e, "create user"))?;
        Ok(())
    }
}

fn user_from_model(m: users::Model) -> User {
    User {
        id: m.id,
        mobile: m.mobile,
        is_active: m.is_active,
        created_at: m.created_at,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<StudentRecord>, ApiError> {
        let model = user_students::Entity::find()
            .filter(user_students::Column::UserId.eq(user_id))
            .order_by_desc(user_students::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("find student profile by user")?;
        Ok(model.map(Students::record))
    }

    async fn update(&self, user_id: Uuid, update: &ProfileUpdate) -> Result<bool, ApiError> {
        let res = user_students::Entity::update_many()
            .col_expr(user_students::Column::Name, Expr::value(update.name.clone()))
            .col_expr(user_students::Column::Photo, Expr::value(update.photo.clone()))
            .col_expr(user_students::Column::State, Expr::value(update.state.clone()))
            .col_expr(user_students::Column::District, Expr::value(update.district.clone()))
            .filter(user_students::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("update student profile")?;
        Ok(res.rows_affected > 0)
    }
}
