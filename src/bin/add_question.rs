//! Adds a question to a `questions.json` document for the static-hosting
//! deployment. The file uses the same layout the server reads, so it can also
//! seed a server's data file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use chgk_quiz::dto::question_dto::CreateQuestionRequest;
use chgk_quiz::error::Error;
use chgk_quiz::models::Question;
use chgk_quiz::storage::{JsonFileStore, QuizStore};
use chgk_quiz::utils::{id::generate_question_id, validation::first_message};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Добавление вопроса в questions.json")]
struct Args {
    /// Document to update.
    #[arg(long, default_value = "questions.json")]
    file: PathBuf,

    /// Explicit question id; a random UUID is used when omitted.
    #[arg(long)]
    id: Option<String>,

    #[arg(long)]
    question: Option<String>,

    #[arg(long)]
    answer: Option<String>,

    #[arg(long)]
    success_image: Option<String>,

    /// Overwrite an existing id without asking.
    #[arg(long)]
    yes: bool,

    /// Where the static bundle is published.
    #[arg(long, env = "PAGES_BASE_URL", default_value = "https://<username>.github.io/chgk")]
    base_url: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Added { id: String },
    Cancelled,
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> anyhow::Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn run(args: Args, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<Outcome> {
    writeln!(out, "=== Добавление вопроса в {} ===\n", args.file.display())?;

    let question = match args.question {
        Some(q) => q,
        None => prompt(input, out, "Введите вопрос: ")?,
    };
    let answer = match args.answer {
        Some(a) => a,
        None => prompt(input, out, "Введите правильный ответ: ")?,
    };

    let request = CreateQuestionRequest {
        question,
        answer,
        success_image: args.success_image,
    };
    let request = match request.into_checked() {
        Ok(req) => req,
        Err(Error::BadRequest(msg)) => bail!("Ошибка: {}", msg),
        Err(Error::Validation(errs)) => bail!("Ошибка: {}", first_message(&errs)),
        Err(other) => return Err(other.into()),
    };

    let id = match args.id.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => {
            let id = generate_question_id();
            writeln!(out, "Сгенерирован ID: {}", id)?;
            id
        }
    };

    let store = JsonFileStore::new(&args.file);
    let mut data = match store.load_strict().await {
        Ok(data) => data,
        Err(Error::Json(err)) => bail!(
            "Ошибка: файл {} повреждён ({}), исправьте его вручную",
            args.file.display(),
            err
        ),
        Err(other) => {
            return Err(other)
                .with_context(|| format!("Не удалось прочитать {}", args.file.display()))
        }
    };

    if data.questions.contains_key(&id) && !args.yes {
        let reply = prompt(
            input,
            out,
            &format!("Вопрос с ID '{}' уже существует. Перезаписать? (y/n): ", id),
        )?;
        if !reply.eq_ignore_ascii_case("y") {
            writeln!(out, "Отменено")?;
            return Ok(Outcome::Cancelled);
        }
    }

    data.questions.insert(
        id.clone(),
        Question::new(&request.question, &request.answer, request.success_image),
    );
    store
        .save(&data)
        .await
        .with_context(|| format!("Не удалось записать {}", args.file.display()))?;

    writeln!(out, "\n✓ Вопрос успешно добавлен!")?;
    writeln!(out, "\nУникальная ссылка для GitHub Pages:")?;
    writeln!(
        out,
        "{}/question.html?id={}",
        args.base_url.trim_end_matches('/'),
        id
    )?;
    writeln!(out, "\nНе забудьте сделать commit и push изменений!")?;
    Ok(Outcome::Added { id })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run(args, &mut input, &mut out).await?;
    Ok(())
}
