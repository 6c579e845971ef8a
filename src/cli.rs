// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print pretty JSON instead of a table")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print one JSON object per line")
}

fn type_arg() -> Arg {
    Arg::new("type").long("type").help("income|expenses")
}

fn year_arg() -> Arg {
    Arg::new("year")
        .long("year")
        .value_parser(value_parser!(i32))
        .help("Calendar year, e.g. 2025")
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_parser(value_parser!(u32).range(1..=12))
        .help("Month of year, 1-12")
}

pub fn build_cli() -> Command {
    Command::new("finlog")
        .version(crate_version!())
        .about("Local-first income/expense tracking with monthly category breakdowns")
        .subcommand(Command::new("init").about("Initialize the database and print its location"))
        .subcommand(
            Command::new("op")
                .about("Record, list, and delete financial operations")
                .subcommand(
                    Command::new("add")
                        .about("Record a new income or expense operation")
                        .arg(type_arg().required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category name, see `finlog categories`"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true)
                                .help("What this operation was for"),
                        )
                        .arg(
                            Arg::new("value")
                                .long("value")
                                .required(true)
                                .help("Positive amount"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List operations, most recent first")
                        .arg(type_arg())
                        .arg(year_arg())
                        .arg(month_arg())
                        .arg(Arg::new("category").long("category").help("Category name"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .default_value("1000")
                                .help("Cap the number of records fetched"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an operation by id")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Income, expenses, and balance over the whole history")
                .arg(json_flag())
                .arg(jsonl_flag()),
        )
        .subcommand(
            Command::new("breakdown")
                .about("Per-category totals for one month (the pie-chart view)")
                .arg(type_arg().help("income|expenses (default: income)"))
                .arg(year_arg().help("Calendar year (default: latest on record)"))
                .arg(month_arg().help("Month 1-12 (default: current month if on record)"))
                .arg(json_flag())
                .arg(jsonl_flag()),
        )
        .subcommand(
            Command::new("categories")
                .about("Print the category catalog")
                .arg(type_arg()),
        )
        .subcommand(
            Command::new("export").about("Export data to a file").subcommand(
                Command::new("operations")
                    .about("Export the full operation history, oldest first")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true).help("Output path")),
            ),
        )
        .subcommand(Command::new("doctor").about("Check database health and record invariants"))
}
