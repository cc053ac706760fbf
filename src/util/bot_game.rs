//! Play bots against each other to compare their strength.
use std::fmt::{Debug, Formatter};
use std::sync::Mutex;

use itertools::Itertools;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::ai::Bot;
use crate::board::{Board, Side};

/// The number of games won by each bot. Tablut games can't be drawn, so these add up to the number of games played.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Wins {
    pub left: u32,
    pub right: u32,
}

impl Wins {
    pub fn total(self) -> u32 {
        self.left + self.right
    }

    fn add(&mut self, left_won: bool) {
        if left_won {
            self.left += 1;
        } else {
            self.right += 1;
        }
    }
}

/// A finished game between the left and right bot.
#[derive(Debug, Clone)]
pub struct Replay<B: Board> {
    pub start: B,
    /// The side played by the left bot.
    pub side_l: Side,
    pub moves: Vec<B::Move>,
    pub winner: Side,
}

impl<B: Board> Replay<B> {
    pub fn left_won(&self) -> bool {
        self.winner == self.side_l
    }
}

pub struct BotGameResult<B: Board> {
    pub replays: Vec<Replay<B>>,
    pub wins: Wins,
    pub attacker_wins: u32,
}

impl<B: Board> BotGameResult<B> {
    pub fn game_count(&self) -> u32 {
        self.replays.len() as u32
    }

    pub fn average_game_length(&self) -> f32 {
        let total: usize = self.replays.iter().map(|r| r.moves.len()).sum();
        total as f32 / self.replays.len() as f32
    }
}

impl<B: Board> Debug for BotGameResult<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let games = self.game_count();
        f.debug_struct("BotGameResult")
            .field("games", &games)
            .field("average_length", &self.average_game_length())
            .field("wins", &self.wins)
            .field("attacker_wins", &self.attacker_wins)
            .field("defender_wins", &(games - self.attacker_wins))
            .finish()
    }
}

/// Play `games_per_side` games between fresh instances of the left and right bot, each starting from `start()`.
/// If `both_sides` is true every start position is played twice, with the bots switching sides.
///
/// The games run in parallel on the rayon thread pool.
/// `callback` is called after each game with the running totals, eg. to print progress.
#[must_use]
pub fn run<B: Board, L: Bot<B>, R: Bot<B>>(
    start: impl Fn() -> B + Sync,
    bot_l: impl Fn() -> L + Sync,
    bot_r: impl Fn() -> R + Sync,
    games_per_side: u32,
    both_sides: bool,
    callback: impl Fn(Wins, &Replay<B>) + Sync,
) -> BotGameResult<B> {
    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };
    let starts = (0..games_per_side).map(|_| start()).collect_vec();
    let running = Mutex::new(Wins::default());

    let replays: Vec<Replay<B>> = (0..game_count)
        .into_par_iter()
        .panic_fuse()
        .map(|game_i| {
            let (pair_i, flip) = if both_sides {
                (game_i / 2, game_i % 2 == 1)
            } else {
                (game_i, false)
            };

            let replay = play_single_game(&starts[pair_i as usize], flip, &mut bot_l(), &mut bot_r());

            // SAFETY: the lock is only poisoned if another game panicked, and then panic_fuse stops everything anyway
            let mut running = running.lock().unwrap();
            running.add(replay.left_won());
            callback(*running, &replay);

            replay
        })
        .collect();

    let mut wins = Wins::default();
    for replay in &replays {
        wins.add(replay.left_won());
    }
    let attacker_wins = replays.iter().filter(|r| r.winner == Side::Attacker).count() as u32;

    BotGameResult {
        replays,
        wins,
        attacker_wins,
    }
}

fn play_single_game<B: Board>(start: &B, flip: bool, bot_l: &mut impl Bot<B>, bot_r: &mut impl Bot<B>) -> Replay<B> {
    let mut board = start.clone();
    let side_l = if flip {
        board.next_side().other()
    } else {
        board.next_side()
    };
    let mut moves = vec![];

    while board.outcome().is_none() {
        let picked = if board.next_side() == side_l {
            bot_l.select_move(&board)
        } else {
            bot_r.select_move(&board)
        };
        // SAFETY: the board is not done so both bots can pick a move
        let mv = picked.unwrap();

        moves.push(mv);
        board
            .play(mv)
            .unwrap_or_else(|e| panic!("Bot picked move {} on board\n{}\nfailed with {}", mv, board, e));
    }

    Replay {
        start: start.clone(),
        side_l,
        moves,
        // SAFETY: the loop only stops once there is an outcome
        winner: board.outcome().unwrap().winner(),
    }
}
