use std::path::PathBuf;
use std::process;

use clap::Parser;
use nihongo_quiz::{
    CommandTransport, LessonRepository, Quiz, QuizConfig, QuizError, load_lessons_from_json,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the lessons from (defaults to the bundled lessons)
    #[arg(short, long)]
    lessons: Option<PathBuf>,

    /// Lives at the start of a run
    #[arg(long, default_value_t = nihongo_quiz::config::DEFAULT_LIVES)]
    lives: u32,

    /// Points awarded per correct answer
    #[arg(long, default_value_t = nihongo_quiz::config::DEFAULT_POINTS_PER_CORRECT)]
    points: u32,

    /// Player command for video and audio clips, e.g. "mpv --really-quiet"
    #[arg(long)]
    player: Option<String>,

    /// Validate the lessons, print a summary and exit
    #[arg(long)]
    check: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let repo = match &args.lessons {
        Some(path) => load_lessons_from_json(path)?,
        None => LessonRepository::builtin()?,
    };

    if args.check {
        print_summary(&repo);
        return Ok(());
    }

    let config = QuizConfig::default()
        .with_lives(args.lives)
        .with_points(args.points);
    let mut quiz = Quiz::new(repo, config);

    if let Some(command) = args.player.as_deref() {
        match CommandTransport::new(command) {
            Some(player) => quiz = quiz.with_media(Box::new(player)),
            None => log::warn!("ignoring empty --player command"),
        }
    }

    quiz.run()
}

fn print_summary(repo: &LessonRepository) {
    for lesson in repo.lessons() {
        println!(
            "{:>3}  {}  ({} questions)",
            lesson.id,
            lesson.title,
            lesson.question_count()
        );
        for (index, question) in lesson.questions.iter().enumerate() {
            println!("       {}. [{}] {}", index + 1, question.kind_label(), question.question);
        }
    }
    println!(
        "ok: {} lessons, {} questions",
        repo.lesson_count(),
        repo.question_count()
    );
}
