use h1parse::{Config, Request, RequestReader};
use tokio::net::{TcpListener, TcpStream};

const DEFAULT_ADDR: &str = "127.0.0.1:42069";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let addr = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");

    loop {
        let (io, peer) = match listener.accept().await {
            Ok(ok) => ok,
            Err(err) => {
                log::error!("failed to accept connection: {err}");
                continue;
            }
        };

        log::debug!("connection accepted: {peer}");
        tokio::spawn(connection(io));
    }
}

async fn connection(io: TcpStream) {
    let mut reader = RequestReader::with_config(io, Config::new());

    match reader.read_request().await {
        Ok(request) => print_request(&request),
        Err(err) => log::error!("failed to read request: {err}"),
    }
}

fn print_request(request: &Request) {
    println!("Request line:");
    println!("- Method: {}", request.method());
    println!("- Target: {}", request.target());
    println!("- Version: {}", request.version().as_str());
    println!("Headers:");
    for (name, value) in request.headers() {
        println!("- {name}: {value}");
    }
}
