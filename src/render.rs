//! Terminal presentation of boards, solution replays and search statistics.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use eight_puzzle::puzzle::BLANK;
use eight_puzzle::{Goal, Move, PuzzleState, SearchResult, SearchStatus, Strategy};

/// Queues one board. Tiles already on their goal cell are drawn green.
pub fn draw_board<W: Write>(out: &mut W, state: &PuzzleState, goal: &Goal) -> Result<()> {
    for (row, cells) in state.to_grid().iter().enumerate() {
        out.queue(Print("  "))?;
        for (col, &value) in cells.iter().enumerate() {
            if value == BLANK {
                out.queue(Print("  . "))?;
                continue;
            }
            let color = if goal.position_of(value) == (row, col) {
                Color::Green
            } else {
                Color::White
            };
            out.queue(SetForegroundColor(color))?
                .queue(Print(format!("{:3} ", value)))?
                .queue(ResetColor)?;
        }
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

fn heading<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.queue(SetAttribute(Attribute::Bold))?
        .queue(Print(text))?
        .queue(SetAttribute(Attribute::Reset))?
        .queue(Print("\r\n"))?;
    Ok(())
}

/// Prints every state of the path with the move that led to it.
pub fn print_path<W: Write>(out: &mut W, path: &[PuzzleState], goal: &Goal) -> Result<()> {
    for (step, state) in path.iter().enumerate() {
        let label = match step.checked_sub(1).and_then(|prev| path[prev].move_between(state)) {
            Some(movement) => format!("step {}: {}", step, movement),
            None => "start".to_string(),
        };
        heading(out, &label)?;
        draw_board(out, state, goal)?;
        out.queue(Print("\r\n"))?;
    }
    out.flush()?;
    Ok(())
}

/// Replays the path in place, redrawing the board every `delay`.
pub fn animate_path<W: Write>(
    out: &mut W,
    title: &str,
    path: &[PuzzleState],
    goal: &Goal,
    delay: Duration,
) -> Result<()> {
    for (step, state) in path.iter().enumerate() {
        out.queue(terminal::Clear(terminal::ClearType::All))?
            .queue(cursor::MoveTo(0, 0))?;
        heading(out, title)?;
        out.queue(Print(format!("move {}/{}\r\n\r\n", step, path.len() - 1)))?;
        draw_board(out, state, goal)?;
        out.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}

pub fn print_stats<W: Write>(
    out: &mut W,
    strategy: Strategy,
    result: &SearchResult,
    elapsed: Duration,
) -> Result<()> {
    heading(out, &format!("{} search", strategy))?;
    let status = match result.status {
        SearchStatus::Solved => "solved",
        SearchStatus::Exhausted => "exhausted (no solution)",
        SearchStatus::Interrupted => "interrupted (time limit)",
    };
    out.queue(Print(format!("  status:          {}\r\n", status)))?
        .queue(Print(format!("  time:            {:.2?}\r\n", elapsed)))?
        .queue(Print(format!("  nodes expanded:  {}\r\n", result.expanded_nodes)))?
        .queue(Print(format!("  solution length: {}\r\n", result.solution_length())))?;
    if let Some(moves) = result.moves() {
        let moves: Vec<String> = moves.iter().map(Move::to_string).collect();
        out.queue(Print(format!("  moves:           {}\r\n", moves.join(" "))))?;
    }
    out.queue(Print("\r\n"))?;
    out.flush()?;
    Ok(())
}
