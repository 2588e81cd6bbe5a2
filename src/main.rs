#![warn(rust_2018_idioms)]

//! Interactive board for building small graphs and running
//! two exact searches on them: k-colourability of the active
//! graph and isomorphism between two graphs. Rendering stays
//! external; a stdin command loop stands in for it.

use std::{env, io, path::PathBuf};

mod graph;

mod board;
use board::{Board, ClickOutcome};

mod input;
use input::{read_command, Command};

mod palette;
use palette::{display_colours, GoldenAnglePalette};

mod statistics;
use statistics::{ColouringStatistics, IsomorphismStatistics, Statistics};

mod debug;
pub use debug::Error;

pub fn do_if_some<F, T>(optional: &mut Option<T>, f: F)
where
    F: FnOnce(&mut T),
{
    if let Some(val) = optional {
        f(val);
    }
}

/// Required positional colouring budget, optionally
/// followed by `-s <file>` to record statistics.
fn parse_args() -> Result<(usize, Option<PathBuf>), Error> {
    let mut args = env::args().skip(1);

    let k = args
        .next()
        .ok_or(Error::Usage)?
        .parse::<usize>()
        .map_err(|_| Error::Usage)?;

    let statistics_file = match args.next() {
        Some(flag) if flag == "-s" => Some(PathBuf::from(args.next().ok_or(Error::Usage)?)),
        Some(_) => return Err(Error::Usage),
        None => None,
    };

    if args.next().is_some() {
        return Err(Error::Usage);
    }

    Ok((k, statistics_file))
}

fn run_colouring_search(board: &mut Board, statistics: &mut Option<Statistics>) {
    let graph = board.active_graph_mut();
    let graph_size = graph.size();
    let budget = graph.colouring_budget();

    time!(search_time, colourable, graph.is_colourable());

    println!("{}-colourable: {}", budget, colourable);
    if let Some(colouring) = graph.colouring() {
        println!("Colouring: {:?}", colouring);
        println!(
            "Display colours: {:?}",
            display_colours(colouring, &GoldenAnglePalette)
        );
    }
    println!("Search took {:?}", search_time);

    do_if_some(statistics, |st| {
        st.log_colouring_search(ColouringStatistics {
            graph_size,
            budget,
            colourable,
            search_time,
        })
    });
}

fn run_isomorphism_check(board: &Board, statistics: &mut Option<Statistics>) {
    if let Some((first, second)) = board.graph_pair() {
        time!(search_time, isomorphic, first.is_isomorphic_to(second));

        println!("Isomorphic: {}", isomorphic);
        println!("Search took {:?}", search_time);

        do_if_some(statistics, |st| {
            st.log_isomorphism_check(IsomorphismStatistics {
                graph_sizes: (first.size(), second.size()),
                isomorphic,
                search_time,
            })
        });
    } else {
        eprintln!("Create a second graph first (`graph K`)");
    }
}

fn run_session(
    board: &mut Board,
    statistics: &mut Option<Statistics>,
    stdin: &io::Stdin,
) -> Result<(), Error> {
    loop {
        match read_command(stdin)? {
            Command::Click(placement) => match board.handle_click(placement) {
                Ok(ClickOutcome::VertexCreated(index)) => println!("Created vertex {}", index),
                Ok(ClickOutcome::EdgeStarted(vertex)) => {
                    println!("Drawing edge from vertex {}", vertex)
                }
                Ok(ClickOutcome::EdgeCreated(start, end)) => {
                    println!("Created edge between {} and {}", start, end)
                }
                Err(error) => eprintln!("{}", error),
            },
            Command::Colour => run_colouring_search(board, statistics),
            Command::Isomorphic => run_isomorphism_check(board, statistics),
            Command::Toggle => println!("Active graph: {}", board.toggle_active()),
            Command::NewGraph(k) => {
                if let Err(error) = board.create_graph(k) {
                    eprintln!("{}", error);
                }
            }
            Command::ShowMatrix => println!("{:?}", board.active_graph()),
            Command::Quit => return Ok(()),
        }
    }
}

fn main() -> Result<(), Error> {
    let (k, statistics_file) = parse_args()?;

    let mut statistics = statistics_file.map(Statistics::new);
    let mut board = Board::new(k)?;

    let stdin = io::stdin();
    run_session(&mut board, &mut statistics, &stdin)?;

    do_if_some(&mut statistics, Statistics::log_end);
    if let Some(statistics) = statistics {
        statistics.save_statistics()?;
    }

    Ok(())
}
