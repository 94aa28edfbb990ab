use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Countries(args) => commands::countries::handle(&args, ctx, flags).await,
        Commands::Regions(args) => commands::catalog::handle_regions(&args, ctx, flags).await,
        Commands::Indicators => commands::catalog::handle_indicators(ctx, flags),
        Commands::Years => commands::catalog::handle_years(flags),
        Commands::Series(args) => commands::series::handle(&args, ctx, flags).await,
        Commands::Snapshot(args) => commands::snapshot::handle(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
