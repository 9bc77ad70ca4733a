//! bbs - terminal client for the Maximum bulletin board
//!
//! Drives the board crate's session engine: list and search threads,
//! read a thread's comments, create and delete threads, post comments,
//! and manage the signed-in session.

use std::io::{self, IsTerminal};
use std::process;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use log::error;

use board::{
    ActionError, ApiError, BoardService, CreateOutcome, DeleteOutcome, ThreadId, filter_threads,
};

mod render;

const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Parser)]
#[command(name = "bbs", about = "Terminal client for the Maximum bulletin board")]
struct Cli {
    /// Board server address
    #[arg(
        long,
        global = true,
        env = "BBS_API_URL",
        default_value = DEFAULT_API_URL
    )]
    api_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List threads (one page), optionally filtered by keyword
    Threads(ThreadsArgs),
    /// Show a thread and its comments
    Thread(ThreadArgs),
    /// Create a thread
    Post(PostArgs),
    /// Post a comment to a thread
    Comment(CommentArgs),
    /// Delete a thread
    Delete(DeleteArgs),
    /// Sign in and store the session
    Login(LoginArgs),
    /// Register a new user
    Register(RegisterArgs),
    /// Drop the stored session
    Logout,
    /// Show who is signed in
    Whoami,
}

#[derive(Args)]
struct ThreadsArgs {
    /// Page of the listing to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Keyword filter. Applies to the fetched page only; the server
    /// paginates, so this is not a whole-board search.
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args)]
struct ThreadArgs {
    /// Thread ID
    id: i64,
}

#[derive(Args)]
struct PostArgs {
    /// Thread title
    name: String,
}

#[derive(Args)]
struct CommentArgs {
    /// Thread ID
    thread_id: i64,
    /// Comment body
    message: String,
}

#[derive(Args)]
struct DeleteArgs {
    /// Thread ID
    id: i64,
}

#[derive(Args)]
struct LoginArgs {
    /// User name
    name: String,
    /// Password (prompted when omitted)
    #[arg(long)]
    password: Option<String>,
}

#[derive(Args)]
struct RegisterArgs {
    /// User name
    name: String,
    /// Password (prompted when omitted)
    #[arg(long)]
    password: Option<String>,
}

#[derive(Debug)]
enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

type CliResult<T> = Result<T, CliError>;

impl CliError {
    fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        Self::Failure(err.into())
    }
}

impl From<ActionError> for CliError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::Unauthenticated => {
                Self::validation("トークンがありません。ログインが必要です。")
            }
            ActionError::Api(api) => Self::Failure(api.into()),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {}", err.display_message());
        process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let service = BoardService::new(&cli.api_url).map_err(CliError::failure)?;

    match cli.command {
        Command::Threads(args) => handle_threads(&service, args),
        Command::Thread(args) => handle_thread(&service, args),
        Command::Post(args) => handle_post(&service, args),
        Command::Comment(args) => handle_comment(&service, args),
        Command::Delete(args) => handle_delete(&service, args),
        Command::Login(args) => handle_login(&service, args),
        Command::Register(args) => handle_register(&service, args),
        Command::Logout => handle_logout(&service),
        Command::Whoami => handle_whoami(&service),
    }
}

fn handle_threads(service: &BoardService, args: ThreadsArgs) -> CliResult<()> {
    service.change_page(args.page)?;

    let Some(snapshot) = service.threads_snapshot() else {
        return Ok(());
    };

    let keyword = args.search.as_deref().unwrap_or("");
    let visible = filter_threads(&snapshot.items, keyword);

    print!(
        "{}",
        render::thread_page(&visible, &snapshot.meta, &service.identity())
    );
    println!("{}", render::pagination_bar(&service.page_controls()));
    Ok(())
}

fn handle_thread(service: &BoardService, args: ThreadArgs) -> CliResult<()> {
    let view = match service.open_thread(ThreadId::new(args.id)) {
        Ok(view) => view,
        Err(ApiError::NotFound) => {
            return Err(CliError::validation("スレッドが見つかりません"));
        }
        Err(err) => return Err(err.into()),
    };

    view.sync()?;
    let meta = view.meta().unwrap_or_default();
    print!(
        "{}",
        render::comment_page(
            view.thread(),
            &view.comments(),
            meta.comment_count,
            meta.max_comments,
            meta.is_limit_reached,
        )
    );
    Ok(())
}

fn handle_post(service: &BoardService, args: PostArgs) -> CliResult<()> {
    if args.name.trim().is_empty() {
        return Err(CliError::validation("スレッド名を入力してください"));
    }

    match service.create_thread(&args.name)? {
        CreateOutcome::Created => {
            println!("スレッドを作成しました: {}", args.name);
            Ok(())
        }
        CreateOutcome::CapacityReached => {
            println!("スレッドの上限に達しました。");
            Ok(())
        }
    }
}

fn handle_comment(service: &BoardService, args: CommentArgs) -> CliResult<()> {
    if args.message.trim().is_empty() {
        return Err(CliError::validation("コメントを入力してください"));
    }

    let view = match service.open_thread(ThreadId::new(args.thread_id)) {
        Ok(view) => view,
        Err(ApiError::NotFound) => {
            return Err(CliError::validation("スレッドが見つかりません"));
        }
        Err(err) => return Err(err.into()),
    };

    match view.post_comment(&args.message)? {
        CreateOutcome::Created => {
            println!("コメントを投稿しました");
            Ok(())
        }
        CreateOutcome::CapacityReached => {
            println!("コメントの上限に達しました。");
            Ok(())
        }
    }
}

fn handle_delete(service: &BoardService, args: DeleteArgs) -> CliResult<()> {
    match service.delete_thread(ThreadId::new(args.id))? {
        DeleteOutcome::Deleted => {
            println!("スレッドを削除しました");
            Ok(())
        }
        DeleteOutcome::NotFound => {
            println!("スレッドが見つかりませんでした");
            Ok(())
        }
        DeleteOutcome::ServerError => {
            println!("サーバーエラーが発生しました");
            Ok(())
        }
    }
}

fn handle_login(service: &BoardService, args: LoginArgs) -> CliResult<()> {
    let password = resolve_password(args.password, "パスワード: ")?;

    match service.login(&args.name, &password) {
        Ok(identity) => {
            println!("{} さん、こんにちは！", identity.name);
            Ok(())
        }
        Err(err) => match err.downcast_ref::<ApiError>() {
            Some(ApiError::Unauthorized) => Err(CliError::validation(
                "ユーザー名またはパスワードが間違っています",
            )),
            _ => Err(CliError::failure(err)),
        },
    }
}

fn handle_register(service: &BoardService, args: RegisterArgs) -> CliResult<()> {
    let password = resolve_password(args.password, "パスワード: ")?;

    match service.register(&args.name, &password) {
        Ok(()) => {
            println!("登録しました。ログインしてください。");
            Ok(())
        }
        Err(ApiError::NameTaken) => Err(CliError::validation(
            "そのユーザー名は既に使われています",
        )),
        Err(err) => Err(err.into()),
    }
}

fn handle_logout(service: &BoardService) -> CliResult<()> {
    service.logout().map_err(CliError::failure)?;
    println!("ログアウトしました");
    Ok(())
}

fn handle_whoami(service: &BoardService) -> CliResult<()> {
    let identity = service.identity();
    if identity.is_anonymous() {
        println!("未ログイン");
    } else {
        println!("{}", identity.name);
    }
    Ok(())
}

fn resolve_password(flag: Option<String>, prompt: &str) -> CliResult<String> {
    if let Some(value) = flag {
        if value.is_empty() {
            return Err(CliError::validation("パスワードを入力してください"));
        }
        return Ok(value);
    }

    if io::stdin().is_terminal() {
        let password = rpassword::prompt_password(prompt)
            .map_err(|err| CliError::failure(anyhow!("failed to read password: {err}")))?;
        if password.is_empty() {
            return Err(CliError::validation("パスワードを入力してください"));
        }
        Ok(password)
    } else {
        Err(CliError::validation(
            "パスワードが必要です。--password で指定してください",
        ))
    }
}
