use serde::Serialize;

/// Static service catalog. Prices in whole reais.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub name: &'static str,
    pub price: i64,
}

pub const CATALOG: &[Service] = &[
    Service { name: "Corte Máquina Simples", price: 25 },
    Service { name: "Corte Máquina e Tesoura", price: 35 },
    Service { name: "Corte Degradê", price: 35 },
    Service { name: "Corte Navalhado", price: 40 },
    Service { name: "Corte Tesoura", price: 40 },
    Service { name: "Corte Infantil", price: 50 },
    Service { name: "Pezinho (Cantinho)", price: 20 },
    Service { name: "Razor / Risca (Listra)", price: 10 },
    Service { name: "Sobrancelhas", price: 15 },
    Service { name: "Barba", price: 35 },
    Service { name: "Barboterapia", price: 50 },
    Service { name: "Passar a Máquina na Barba", price: 20 },
    Service { name: "Limpeza Facial", price: 30 },
    Service { name: "Depilação Costas (Máquina)", price: 20 },
    Service { name: "Selagem", price: 80 },
    Service { name: "Lavagem", price: 20 },
    Service { name: "Esfoliação", price: 20 },
    Service { name: "Penteado", price: 30 },
];

pub fn find(name: &str) -> Option<&'static Service> {
    CATALOG.iter().find(|s| s.name == name)
}

pub fn price_of(name: &str) -> i64 {
    find(name).map(|s| s.price).unwrap_or(0)
}
