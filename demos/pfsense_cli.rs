use clap::{Parser, Subcommand};
use pfsense_client::{PfSenseClient, PfSenseResult};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, env = "PFSENSE_HOST")]
    host: String,

    #[arg(short = 'u', long, env = "PFSENSE_USERNAME")]
    username: String,

    #[arg(short = 'p', long, env = "PFSENSE_PASSWORD", hide_env_values = true)]
    password: String,

    /// Reject self-signed or otherwise invalid TLS certificates.
    #[arg(long)]
    verify_tls: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    All,
    Vlans,
    Interfaces,
    Leases {
        /// Only show clients that are currently online.
        #[arg(long)]
        online: bool,
    },
}

async fn print_vlans(client: &PfSenseClient) -> PfSenseResult<()> {
    let vlans = client.vlans().list().send().await?;
    println!("\nFound {} VLANs:", vlans.len());
    println!("{:<4} {:<14} {:<6} {}", "ID", "Interface", "Tag", "Description");
    println!("{}", "-".repeat(60));
    for vlan in vlans {
        println!(
            "{:<4} {:<14} {:<6} {}",
            vlan.id,
            vlan.parent(),
            vlan.tag(),
            vlan.config.descr.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

async fn print_interfaces(client: &PfSenseClient) -> PfSenseResult<()> {
    let interfaces = client.interfaces().list().send().await?;
    println!("\nFound {} interfaces:", interfaces.len());
    println!("{:<8} {:<12} {:<16} {}", "ID", "Port", "IPv4", "Description");
    println!("{}", "-".repeat(60));
    for interface in interfaces {
        let ipv4 = match (&interface.config.ipaddr, interface.config.subnet) {
            (Some(addr), Some(subnet)) => format!("{addr}/{subnet}"),
            (Some(addr), None) => addr.clone(),
            _ => "-".to_string(),
        };
        println!(
            "{:<8} {:<12} {:<16} {}",
            interface.id, interface.config.interface, ipv4, interface.config.descr
        );
    }
    Ok(())
}

async fn print_leases(client: &PfSenseClient, online_only: bool) -> PfSenseResult<()> {
    let leases = client.dhcp().list_leases().send().await?;
    let leases: Vec<_> = leases
        .into_iter()
        .filter(|lease| !online_only || lease.online)
        .collect();

    println!("\nFound {} leases:", leases.len());
    println!("{:<16} {:<18} {:<8} {}", "IP", "MAC", "Type", "Hostname");
    println!("{}", "-".repeat(60));
    for lease in leases {
        println!(
            "{:<16} {:<18} {:<8} {}",
            lease.ip, lease.mac, lease.lease_type, lease.hostname
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> PfSenseResult<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let client = PfSenseClient::builder()
        .host(&cli.host)
        .credentials(&cli.username, &cli.password)
        .accept_invalid_certs(!cli.verify_tls)
        .build()?;

    match cli.command.unwrap_or(Commands::All) {
        Commands::Vlans => print_vlans(&client).await?,
        Commands::Interfaces => print_interfaces(&client).await?,
        Commands::Leases { online } => print_leases(&client, online).await?,
        Commands::All => {
            print_interfaces(&client).await?;
            print_vlans(&client).await?;
            print_leases(&client, false).await?;
        }
    }

    Ok(())
}
