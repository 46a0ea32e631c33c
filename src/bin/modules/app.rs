use super::cli::{
    Cli, Command, FuelArgs, FuelOilArgs, ImbalanceArgs, OutageArgs, ReliabilityArgs, ServeArgs,
};
use super::error::CliError;
use super::io;
use enercalc::reliability::{compare_circuits, project_outages};
use enercalc::{
    Components, EquipmentCounts, FuelOilInput, ImbalanceInput, IndicatorTable, OutageInput,
    ServerConfig, fuel, get_default_indicators, imbalance, server, telemetry,
};
use std::path::Path;

pub fn run(args: Cli) -> Result<(), CliError> {
    match args.command {
        Command::Serve(args) => serve(args),
        Command::Fuel(args) => fuel_composition(args),
        Command::FuelOil(args) => fuel_oil(args),
        Command::Imbalance(args) => electricity_imbalance(args),
        Command::Reliability(args) => circuit_reliability(args),
        Command::Outage(args) => outage_losses(args),
    }
}

fn serve(args: ServeArgs) -> Result<(), CliError> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load_from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(deployment) = args.deployment {
        config.deployment = deployment.into();
    }
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.static_dir.is_some() {
        config.static_dir = args.static_dir;
    }
    if args.indicators.is_some() {
        config.indicators = args.indicators;
    }

    telemetry::init_tracing(&config.log_filter)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(config))?;

    Ok(())
}

fn fuel_composition(args: FuelArgs) -> Result<(), CliError> {
    let components = Components {
        hydrogen: args.hydrogen,
        carbon: args.carbon,
        sulfur: args.sulfur,
        nitrogen: args.nitrogen,
        oxygen: args.oxygen,
        moisture: args.moisture,
        ash: args.ash,
    };
    let report = fuel::analyze(&components);

    let writer = io::get_writer(&args.output.output)?;
    io::write_report(writer, &report, &args.output.format, args.output.precision)
}

fn fuel_oil(args: FuelOilArgs) -> Result<(), CliError> {
    let input = FuelOilInput {
        carbon: args.carbon,
        hydrogen: args.hydrogen,
        oxygen: args.oxygen,
        sulfur: args.sulfur,
        combustible_lhv: args.combustible_lhv,
        raw_moisture: args.raw_moisture,
        dry_ash: args.dry_ash,
        combustible_vanadium: args.combustible_vanadium,
    };
    let report = fuel::convert(&input);

    let writer = io::get_writer(&args.output.output)?;
    io::write_report(writer, &report, &args.output.format, args.output.precision)
}

fn electricity_imbalance(args: ImbalanceArgs) -> Result<(), CliError> {
    let input = ImbalanceInput {
        average_daily_capacity: args.capacity,
        electricity_cost: args.cost,
        standard_deviation: args.std_dev,
    };
    let report = imbalance::evaluate(&input);

    let writer = io::get_writer(&args.output.output)?;
    io::write_report(writer, &report, &args.output.format, args.output.precision)
}

fn circuit_reliability(args: ReliabilityArgs) -> Result<(), CliError> {
    let table = load_indicators(args.indicators.as_deref())?;
    let writer = io::get_writer(&args.output.output)?;

    if args.list {
        return io::write_indicator_table(
            writer,
            &table,
            &args.output.format,
            args.output.precision,
        );
    }

    let mut counts = EquipmentCounts::new();
    for argument in &args.counts {
        let (key, count) = io::parse_count(argument)?;
        counts.insert(key, count);
    }
    let report = compare_circuits(&table, &counts)?;

    io::write_report(writer, &report, &args.output.format, args.output.precision)
}

fn outage_losses(args: OutageArgs) -> Result<(), CliError> {
    let input = OutageInput {
        losses_emergency: args.losses_emergency,
        losses_scheduled: args.losses_scheduled,
        pm: args.pm,
        tm: args.tm,
        failure_rate: args.failure_rate,
        average_recovery_time: args.average_recovery_time,
        average_planned_downtime: args.average_planned_downtime,
    };
    let report = project_outages(&input);

    let writer = io::get_writer(&args.output.output)?;
    io::write_report(writer, &report, &args.output.format, args.output.precision)
}

fn load_indicators(path: Option<&Path>) -> Result<IndicatorTable, CliError> {
    match path {
        Some(path) => Ok(IndicatorTable::load_from_file(path)?),
        None => Ok(get_default_indicators().clone()),
    }
}
