use std::io::{self, BufRead};
use std::path::Path;

use anyhow::Result;
use catchphrase_core::*;

fn show(game: &GameSession, out_dir: &Path) -> Result<()> {
    let Some(frame) = game.current_frame() else {
        return Ok(());
    };
    let path = out_dir.join("current.png");
    save(frame, &path)?;
    match game.state() {
        SessionState::Playing { shown } => println!(
            "{} of {} pieces shown, {} left (see {})",
            shown,
            game.reveal_count(),
            game.pieces_left(),
            path.display()
        ),
        _ => println!("Here is the answer (see {})", path.display()),
    }
    Ok(())
}

/// Drive a session from stdin: Enter reveals a piece, `a` shows the answer, `q` quits.
pub(crate) fn run(mut game: GameSession, out_dir: &Path) -> Result<()> {
    println!(
        "There's an image behind the mask. A piece will be revealed at a time - {} pieces will be \
         revealed in total. Try to guess what the image is!",
        game.reveal_count()
    );
    println!("Press Enter to start.");

    let mut lines = io::stdin().lock().lines();
    if lines.next().transpose()?.is_none() {
        return Ok(());
    }
    game.start()?;
    show(&game, out_dir)?;

    while !game.is_finished() {
        if game.can_reveal() {
            println!("Enter: reveal a piece, a: show the answer, q: quit");
        } else {
            println!("No pieces left. a: show the answer, q: quit");
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        match line.trim() {
            "q" => break,
            "a" => {
                game.show_answer()?;
                show(&game, out_dir)?;
            }
            _ => {
                if game.reveal_piece()?.has_update() {
                    show(&game, out_dir)?;
                }
            }
        }
    }
    Ok(())
}
