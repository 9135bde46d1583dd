/// Authenticator model identifier embedded in attested credential data.
pub const AAGUID: [u8; 16] = [
    0x5f, 0x6b, 0x65, 0x79, 0x9c, 0x21, 0x4e, 0x0a, 0xb7, 0x3d, 0x1f, 0x88, 0x00, 0x00, 0x00, 0x01,
];

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "softkey", about = "Software WebAuthn authenticator toolkit")]
pub struct Config {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Print a fresh credential id and its 16-byte form.
    NewId,
    /// Parse a credential id and print its 16-byte form.
    IdBytes { id: String },
    /// Generate a credential: id, private scalar and SEC1 public key.
    Keygen,
    /// Print the clientDataJSON for a ceremony.
    ClientData {
        #[arg(long)]
        challenge: String,
        #[arg(long)]
        origin: String,
        #[arg(long = "type", default_value = "webauthn.get")]
        ceremony: String,
    },
    /// Sign an assertion with a hex-encoded P-256 private scalar.
    Assert {
        #[arg(long)]
        key: String,
        #[arg(long)]
        rp_id: String,
        #[arg(long)]
        challenge: String,
        #[arg(long)]
        origin: String,
        #[arg(long, default_value_t = 0)]
        counter: u32,
        /// Set the user-verified flag.
        #[arg(long)]
        uv: bool,
    },
}
