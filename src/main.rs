pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, ingredient, recipe, tag};

#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::incoming::use_cases::{
    AuthenticateUseCase, CreateSuperuserUseCase, CreateUserCommand,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::services::{
    AuthenticateService, CreateTokenService, CreateUserService, DeleteUserService, FetchProfileService,
    UpdateProfileService,
};
use crate::auth::application::user_use_cases::UserUseCases;
use crate::config::AppConfig;
use crate::ingredient::adapter::outgoing::{IngredientQueryPostgres, IngredientRepositoryPostgres};
use crate::ingredient::application::ingredient_use_cases::IngredientUseCases;
use crate::ingredient::application::services::{
    CreateIngredientService, DeleteIngredientService, GetIngredientService,
    ListIngredientsService, UpdateIngredientService,
};
use crate::recipe::adapter::outgoing::{
    LocalImageStorage, RecipeQueryPostgres, RecipeRepositoryPostgres,
};
use crate::recipe::application::domain::policies::ImagePolicy;
use crate::recipe::application::ports::outgoing::ImageStorage;
use crate::recipe::application::recipe_use_cases::RecipeUseCases;
use crate::recipe::application::services::{
    CreateRecipeService, DeleteRecipeService, GetRecipeService, ListRecipesService,
    UpdateRecipeService, UploadImageService,
};
use crate::shared::api::{custom_json_config, custom_query_config, register_method_fallbacks};
use crate::tag::adapter::outgoing::{TagQueryPostgres, TagRepositoryPostgres};
use crate::tag::application::services::{
    CreateTagService, DeleteTagService, GetTagService, ListTagsService, UpdateTagService,
};
use crate::tag::application::tag_use_cases::TagUseCases;

/// Multipart framing around the image itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub users: UserUseCases,
    pub tags: TagUseCases,
    pub ingredients: IngredientUseCases,
    pub recipes: RecipeUseCases,
}

#[derive(Parser)]
#[command(name = "recipe_api", about = "Recipe API server and management commands")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Apply pending database migrations
    Migrate,

    /// Create a staff superuser account
    CreateSuperuser {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        name: Option<String>,
    },
}

#[cfg(not(tarpaulin_include))]
fn load_env() {
    // .env.{RUST_ENV} first, then .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{env}")).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(not(tarpaulin_include))]
async fn connect(config: &AppConfig) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.pool.max_connections)
        .min_connections(config.pool.min_connections)
        .connect_timeout(config.pool.connect_timeout)
        .acquire_timeout(config.pool.acquire_timeout)
        .idle_timeout(config.pool.idle_timeout)
        .max_lifetime(config.pool.max_lifetime)
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Ok(Arc::new(conn))
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    config: &AppConfig,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    image_policy: ImagePolicy,
) -> anyhow::Result<AppState> {
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env().context("Invalid ARGON2_* settings")?);
    let password_policy: Arc<dyn PasswordPolicy + Send + Sync> = Arc::new(BasicPasswordPolicy);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let user_query = UserQueryPostgres::new(Arc::clone(db));

    let users = UserUseCases {
        create: Arc::new(CreateUserService::new(
            user_repo.clone(),
            password_hasher.clone(),
            password_policy.clone(),
        )),
        token: Arc::new(CreateTokenService::new(
            user_query.clone(),
            password_hasher.clone(),
            token_provider,
        )),
        fetch_profile: Arc::new(FetchProfileService::new(user_query)),
        update_profile: Arc::new(UpdateProfileService::new(
            user_repo.clone(),
            password_hasher,
            password_policy,
        )),
        delete: Arc::new(DeleteUserService::new(user_repo)),
    };

    let tag_repo = TagRepositoryPostgres::new(Arc::clone(db));
    let tag_query = TagQueryPostgres::new(Arc::clone(db));
    let tags = TagUseCases {
        list: Arc::new(ListTagsService::new(tag_query.clone())),
        get: Arc::new(GetTagService::new(tag_query)),
        create: Arc::new(CreateTagService::new(tag_repo.clone())),
        update: Arc::new(UpdateTagService::new(tag_repo.clone())),
        delete: Arc::new(DeleteTagService::new(tag_repo)),
    };

    let ingredient_repo = IngredientRepositoryPostgres::new(Arc::clone(db));
    let ingredient_query = IngredientQueryPostgres::new(Arc::clone(db));
    let ingredients = IngredientUseCases {
        list: Arc::new(ListIngredientsService::new(ingredient_query.clone())),
        get: Arc::new(GetIngredientService::new(ingredient_query)),
        create: Arc::new(CreateIngredientService::new(ingredient_repo.clone())),
        update: Arc::new(UpdateIngredientService::new(ingredient_repo.clone())),
        delete: Arc::new(DeleteIngredientService::new(ingredient_repo)),
    };

    let storage: Arc<dyn ImageStorage + Send + Sync> = Arc::new(LocalImageStorage::new(
        config.media_root.clone(),
        config.media_base_url.clone(),
    ));
    let recipe_repo = RecipeRepositoryPostgres::new(Arc::clone(db));
    let recipe_query = RecipeQueryPostgres::new(Arc::clone(db));
    let recipes = RecipeUseCases {
        list: Arc::new(ListRecipesService::new(recipe_query.clone())),
        get: Arc::new(GetRecipeService::new(recipe_query, storage.clone())),
        create: Arc::new(CreateRecipeService::new(recipe_repo.clone())),
        update: Arc::new(UpdateRecipeService::new(recipe_repo.clone())),
        delete: Arc::new(DeleteRecipeService::new(recipe_repo.clone(), storage.clone())),
        upload_image: Arc::new(UploadImageService::new(recipe_repo, storage, image_policy)),
    };

    Ok(AppState {
        users,
        tags,
        ingredients,
        recipes,
    })
}

#[cfg(not(tarpaulin_include))]
async fn serve() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid server configuration")?;
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;
    let image_policy = ImagePolicy::from_env();
    let payload_limit = image_policy.max_file_size_bytes + MULTIPART_OVERHEAD_BYTES;

    let db = connect(&config).await?;
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let authenticator: Arc<dyn AuthenticateUseCase + Send + Sync> =
        Arc::new(AuthenticateService::new(
            UserQueryPostgres::new(Arc::clone(&db)),
            Arc::clone(&token_provider),
        ));
    let state = build_state(&db, &config, token_provider, image_policy)?;

    let server_url = config.bind_address();
    info!(address = %server_url, media_root = %config.media_root, "Starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&authenticator)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(web::PayloadConfig::new(payload_limit))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn migrate() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid server configuration")?;
    let db = connect(&config).await?;

    Migrator::up(db.as_ref(), None)
        .await
        .context("Migration failed")?;

    info!("Migrations applied");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn create_superuser(email: &str, password: String, name: Option<&str>) -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid server configuration")?;
    let db = connect(&config).await?;

    let command = CreateUserCommand::superuser(email, password, name)?;
    let service = CreateUserService::new(
        UserRepositoryPostgres::new(db),
        Arc::new(Argon2Hasher::from_env().context("Invalid ARGON2_* settings")?),
        Arc::new(BasicPasswordPolicy),
    );

    let user = CreateSuperuserUseCase::execute(&service, command).await?;
    info!(user_id = %user.id, email = %user.email, "Superuser created");

    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start(cli: Cli) -> anyhow::Result<()> {
    load_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Migrate => migrate().await,
        Command::CreateSuperuser {
            email,
            password,
            name,
        } => create_superuser(&email, password, name.as_deref()).await,
    }
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // User
    cfg.service(crate::auth::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::create_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::patch_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::put_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_user_handler);
    // Tags
    cfg.service(crate::tag::adapter::incoming::web::routes::list_tags_handler);
    cfg.service(crate::tag::adapter::incoming::web::routes::create_tag_handler);
    cfg.service(crate::tag::adapter::incoming::web::routes::get_tag_handler);
    cfg.service(crate::tag::adapter::incoming::web::routes::patch_tag_handler);
    cfg.service(crate::tag::adapter::incoming::web::routes::put_tag_handler);
    cfg.service(crate::tag::adapter::incoming::web::routes::delete_tag_handler);
    // Ingredients
    cfg.service(crate::ingredient::adapter::incoming::web::routes::list_ingredients_handler);
    cfg.service(crate::ingredient::adapter::incoming::web::routes::create_ingredient_handler);
    cfg.service(crate::ingredient::adapter::incoming::web::routes::get_ingredient_handler);
    cfg.service(crate::ingredient::adapter::incoming::web::routes::patch_ingredient_handler);
    cfg.service(crate::ingredient::adapter::incoming::web::routes::put_ingredient_handler);
    cfg.service(crate::ingredient::adapter::incoming::web::routes::delete_ingredient_handler);
    // Recipes
    cfg.service(crate::recipe::adapter::incoming::web::routes::list_recipes_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::create_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::get_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::patch_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::put_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::delete_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::upload_image_handler);
    // 405 for unrouted methods on the paths above
    register_method_fallbacks(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();
    if let Err(e) = start(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
