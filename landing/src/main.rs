// Portfolio landing page - Leptos 0.8 CSR

fn main() {
    portfolio_landing::start();
}
