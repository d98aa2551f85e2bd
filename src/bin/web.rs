//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! GENERATE_DELAY_MS (artificial "processing" pause before generating, default 0)
//! and INACTIVITY_TIMEOUT_HOURS (default 12).
//!
//! Each browser gets its own generator, found through a cookie session.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, middleware::Logger, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{RwLock, RwLockWriteGuard};
use std::time::{Duration, Instant};
use team_generator_web::{
    add_players_bulk, generate_teams, load_sample_players, parse_setting,
    presentation::{
        bulk_notice, format_teams_text, notice_for_error, progress_notice, teams_to_csv,
        whatsapp_share_url, Notice, NoticeLevel,
    },
    progress_percent, BulkAdd, GeneratorId, TeamGenerator, TeamsError,
};

/// Cookie session key holding the caller's generator id.
const SESSION_GENERATOR_KEY: &str = "generator_id";

/// Per-session entry: generator data + last activity time (for auto-cleanup).
struct GeneratorEntry {
    generator: TeamGenerator,
    last_activity: Instant,
}

type Generators = HashMap<GeneratorId, GeneratorEntry>;

/// In-memory state: one generator per cookie session. Idle entries are removed.
type AppState = Data<RwLock<Generators>>;

/// Runtime settings read from the environment.
#[derive(Clone, Debug)]
struct ServerConfig {
    host: String,
    port: u16,
    generate_delay: Duration,
    inactivity_timeout: Duration,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| default_host()),
            port: env_or("PORT", default_port()),
            generate_delay: Duration::from_millis(env_or("GENERATE_DELAY_MS", 0u64)),
            inactivity_timeout: Duration::from_secs(env_or("INACTIVITY_TIMEOUT_HOURS", 12u64) * 3600),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Parse an env var, falling back to `default` when unset or invalid.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("Ignoring invalid {}={:?}, using default", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Generator state plus derived metrics, and an optional notice for the UI.
#[derive(Serialize)]
struct GeneratorView<'a> {
    #[serde(flatten)]
    generator: &'a TeamGenerator,
    total_needed: usize,
    players_remaining: usize,
    progress_percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bulk: Option<BulkAdd>,
}

impl<'a> GeneratorView<'a> {
    fn new(generator: &'a TeamGenerator) -> Self {
        Self {
            generator,
            total_needed: generator.total_needed(),
            players_remaining: generator.players_remaining(),
            progress_percent: progress_percent(generator.players().len(), generator.total_needed()),
            notice: None,
            bulk: None,
        }
    }

    fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }
}

fn info(message: &str) -> Option<Notice> {
    Some(Notice {
        level: NoticeLevel::Info,
        message: message.to_string(),
    })
}

/// A settings value as typed by the user: a JSON number or numeric text.
#[derive(Deserialize)]
#[serde(untagged)]
enum SettingValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl SettingValue {
    fn resolve(&self) -> Result<i64, TeamsError> {
        match self {
            SettingValue::Integer(n) => Ok(*n),
            SettingValue::Float(f) => parse_setting(&f.to_string()),
            SettingValue::Text(s) => parse_setting(s),
        }
    }
}

#[derive(Deserialize)]
struct ShapeBody {
    num_teams: Option<SettingValue>,
    team_size: Option<SettingValue>,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct BulkBody {
    text: String,
}

#[derive(Deserialize)]
struct SetPlayersBody {
    players: Vec<String>,
}

#[derive(Serialize)]
struct ShareResponse {
    text: String,
    whatsapp_url: String,
}

fn error_response(err: &TeamsError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": err.to_string(),
        "code": err.code(),
        "notice": notice_for_error(err),
    }))
}

fn no_teams_response() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No teams generated" }))
}

fn lock(state: &AppState) -> Result<RwLockWriteGuard<'_, Generators>, HttpResponse> {
    state
        .write()
        .map_err(|_| HttpResponse::InternalServerError().body("lock error"))
}

/// The caller's generator, created (and remembered in the cookie) if the
/// session has none or it has expired. Touching it refreshes last_activity.
fn current_generator<'a>(
    generators: &'a mut Generators,
    session: &Session,
) -> Result<&'a mut TeamGenerator, HttpResponse> {
    let known = session
        .get::<GeneratorId>(SESSION_GENERATOR_KEY)
        .map_err(|e| HttpResponse::InternalServerError().body(e.to_string()))?
        .filter(|id| generators.contains_key(id));
    let id = match known {
        Some(id) => id,
        None => {
            let generator = TeamGenerator::new();
            let id = generator.id();
            session
                .insert(SESSION_GENERATOR_KEY, id)
                .map_err(|e| HttpResponse::InternalServerError().body(e.to_string()))?;
            log::info!("Created generator {}", id);
            generators.insert(
                id,
                GeneratorEntry {
                    generator,
                    last_activity: Instant::now(),
                },
            );
            id
        }
    };
    let entry = generators
        .get_mut(&id)
        .ok_or_else(|| HttpResponse::InternalServerError().body("generator missing"))?;
    entry.last_activity = Instant::now();
    Ok(&mut entry.generator)
}

/// Lock state and resolve the caller's generator, or return the error response.
macro_rules! generator_or_return {
    ($guard:ident, $state:expr, $session:expr) => {
        let mut $guard = match lock(&$state) {
            Ok(g) => g,
            Err(resp) => return resp,
        };
        let $guard = match current_generator(&mut $guard, &$session) {
            Ok(g) => g,
            Err(resp) => return resp,
        };
    };
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "team-generator-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current generator state (creates one on first visit).
#[get("/api/generator")]
async fn api_get_generator(state: AppState, session: Session) -> HttpResponse {
    generator_or_return!(generator, state, session);
    HttpResponse::Ok().json(GeneratorView::new(generator))
}

/// Update team count and/or team size. Both values are validated before either is applied.
#[put("/api/generator/shape")]
async fn api_set_shape(state: AppState, session: Session, body: Json<ShapeBody>) -> HttpResponse {
    let num_teams = match body.num_teams.as_ref().map(SettingValue::resolve).transpose() {
        Ok(v) => v,
        Err(e) => return error_response(&e),
    };
    let team_size = match body.team_size.as_ref().map(SettingValue::resolve).transpose() {
        Ok(v) => v,
        Err(e) => return error_response(&e),
    };
    generator_or_return!(generator, state, session);
    let mut shape = generator.shape();
    if let Some(n) = num_teams {
        shape = shape.with_num_teams(n);
    }
    if let Some(n) = team_size {
        shape = shape.with_team_size(n);
    }
    generator.set_shape(shape);
    HttpResponse::Ok().json(GeneratorView::new(generator))
}

/// Add one player.
#[post("/api/generator/players")]
async fn api_add_player(state: AppState, session: Session, body: Json<AddPlayerBody>) -> HttpResponse {
    generator_or_return!(generator, state, session);
    match generator.add_player(&body.name) {
        Ok(_) => {
            let notice = progress_notice(generator.total_needed(), generator.players_remaining());
            HttpResponse::Ok().json(GeneratorView::new(generator).with_notice(notice))
        }
        Err(e) => error_response(&e),
    }
}

/// Add one player per line of pasted text.
#[post("/api/generator/players/bulk")]
async fn api_add_players_bulk(state: AppState, session: Session, body: Json<BulkBody>) -> HttpResponse {
    generator_or_return!(generator, state, session);
    match add_players_bulk(generator, &body.text) {
        Ok(outcome) => {
            let notice = bulk_notice(generator.total_needed(), generator.players_remaining(), &outcome);
            let mut view = GeneratorView::new(generator).with_notice(notice);
            view.bulk = Some(outcome);
            HttpResponse::Ok().json(view)
        }
        Err(e) => error_response(&e),
    }
}

/// Replace the whole roster.
#[put("/api/generator/players")]
async fn api_set_players(state: AppState, session: Session, body: Json<SetPlayersBody>) -> HttpResponse {
    generator_or_return!(generator, state, session);
    generator.set_players(&body.players);
    HttpResponse::Ok().json(GeneratorView::new(generator))
}

/// Load the demo roster (truncated to capacity).
#[post("/api/generator/players/sample")]
async fn api_load_sample(state: AppState, session: Session) -> HttpResponse {
    generator_or_return!(generator, state, session);
    load_sample_players(generator);
    HttpResponse::Ok().json(GeneratorView::new(generator).with_notice(info("Example loaded.")))
}

/// Remove a player by name. Removing an unknown name is not an error.
#[delete("/api/generator/players/{name}")]
async fn api_remove_player(state: AppState, session: Session, path: Path<String>) -> HttpResponse {
    generator_or_return!(generator, state, session);
    let notice = if generator.remove_player(&path) {
        info("Player removed")
    } else {
        None
    };
    HttpResponse::Ok().json(GeneratorView::new(generator).with_notice(notice))
}

/// Empty the roster.
#[delete("/api/generator/players")]
async fn api_clear_players(state: AppState, session: Session) -> HttpResponse {
    generator_or_return!(generator, state, session);
    generator.clear_roster();
    HttpResponse::Ok().json(GeneratorView::new(generator).with_notice(info("Player list cleared.")))
}

/// Generate teams from a complete roster.
#[post("/api/generator/teams")]
async fn api_generate_teams(state: AppState, session: Session, config: Data<ServerConfig>) -> HttpResponse {
    if !config.generate_delay.is_zero() {
        tokio::time::sleep(config.generate_delay).await;
    }
    generator_or_return!(generator, state, session);
    match generate_teams(generator) {
        Ok(()) => {
            let notice = Some(Notice {
                level: NoticeLevel::Success,
                message: "Teams generated.".to_string(),
            });
            HttpResponse::Ok().json(GeneratorView::new(generator).with_notice(notice))
        }
        Err(e) => error_response(&e),
    }
}

/// Discard generated teams; roster and shape stay.
#[delete("/api/generator/teams")]
async fn api_clear_teams(state: AppState, session: Session) -> HttpResponse {
    generator_or_return!(generator, state, session);
    generator.clear_teams();
    HttpResponse::Ok().json(GeneratorView::new(generator))
}

/// Share text and WhatsApp link for the current teams.
#[get("/api/generator/teams/share")]
async fn api_share_teams(state: AppState, session: Session) -> HttpResponse {
    generator_or_return!(generator, state, session);
    let Some(result) = generator.teams() else {
        return no_teams_response();
    };
    let text = format_teams_text(&result.teams);
    let whatsapp_url = whatsapp_share_url(&text);
    HttpResponse::Ok().json(ShareResponse { text, whatsapp_url })
}

/// Current teams as a CSV download.
#[get("/api/generator/teams.csv")]
async fn api_teams_csv(state: AppState, session: Session) -> HttpResponse {
    generator_or_return!(generator, state, session);
    let Some(result) = generator.teams() else {
        return no_teams_response();
    };
    match teams_to_csv(&result.teams) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"teams.csv\""))
            .body(body),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().body("csv error")
        }
    }
}

/// Back to defaults: 2 teams of 2, empty roster, no teams.
#[post("/api/generator/reset")]
async fn api_reset(state: AppState, session: Session) -> HttpResponse {
    generator_or_return!(generator, state, session);
    generator.reset();
    HttpResponse::Ok().json(GeneratorView::new(generator).with_notice(info("Settings reset")))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Generators::new()));
    let config = Data::new(config);
    // Sessions only need to survive as long as the in-memory state does.
    let session_key = Key::generate();

    // Background task: every 30 minutes, remove generators idle past the timeout
    let state_cleanup = state.clone();
    let inactivity_timeout = config.inactivity_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive generator(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(config.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_generator)
            .service(api_set_shape)
            .service(api_add_players_bulk)
            .service(api_load_sample)
            .service(api_add_player)
            .service(api_set_players)
            .service(api_clear_players)
            .service(api_remove_player)
            .service(api_teams_csv)
            .service(api_share_teams)
            .service(api_generate_teams)
            .service(api_clear_teams)
            .service(api_reset)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
