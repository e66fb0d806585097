//! Minimal inline HTML for the landing, game, and error pages.

use super::models::{Game, Player};

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn score_line(player: &Player) -> String {
    format!(
        "<p class=\"score\">{}: <span>{}</span></p>",
        escape(&player.name),
        player.score
    )
}

/// The entry page where players start or open a game
pub fn index_page() -> String {
    page(
        "Scorekeeper",
        "<h1>Scorekeeper</h1>\n\
         <p>Start a game with <code>POST /start-game</code>, then open the returned game URL.</p>",
    )
}

/// The main game page: session code and both scores
pub fn game_page(game: &Game) -> String {
    let body = format!(
        "<h1>Game {}</h1>\n{}\n{}",
        escape(game.code()),
        score_line(game.player1()),
        score_line(game.player2()),
    );
    page(&format!("Game {}", game.code()), &body)
}

/// Shown when the requested game code does not exist
pub fn game_not_found_page(code: &str) -> String {
    page(
        "Game not found",
        &format!("<h1>Game {} not found!</h1>", escape(code)),
    )
}
