//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une expression générale bien formée donne la même valeur
//!   qu’une évaluation de référence (arbre), ou "division by zero" quand la
//!   référence rencontre un diviseur nul.

use std::time::{Duration, Instant};

use super::erreur::Genre;
use super::{evaluate, parse};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence ------------------------ */

/// None = division par zéro quelque part dans l’arbre.
type Reference = Option<f64>;

fn applique(op: char, a: Reference, b: Reference) -> Reference {
    let (x, y) = (a?, b?);
    match op {
        '+' => Some(x + y),
        '-' => Some(x - y),
        '*' => Some(x * y),
        _ => {
            if y == 0.0 {
                None
            } else {
                Some(x / y)
            }
        }
    }
}

fn assert_meme_valeur(obtenu: f64, attendu: f64, expr: &str) {
    let ok = obtenu == attendu
        || (obtenu.is_nan() && attendu.is_nan())
        || (obtenu - attendu).abs() <= 1e-9 * attendu.abs().max(1.0);
    assert!(ok, "expr={expr:?} obtenu={obtenu} attendu={attendu}");
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_feuille(rng: &mut Rng) -> (String, Reference) {
    let n = rng.pick(10) as f64;
    // signe collé : valide en tête, après un opérateur ou après '('
    let x = if rng.pick(5) == 0 { -n } else { n };
    (format!("{x}"), Some(x))
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

/// Arbre entièrement parenthésé (sauf la racine).
fn gen_arbre(rng: &mut Rng, profondeur: u32) -> (String, Reference) {
    if profondeur == 0 || rng.pick(3) == 0 {
        return gen_feuille(rng);
    }
    let (ga, va) = gen_arbre(rng, profondeur - 1);
    let (gb, vb) = gen_arbre(rng, profondeur - 1);
    let op = gen_op(rng);
    let espace = if rng.coin() { " " } else { "" };
    (
        format!("({ga}){espace}{op}{espace}({gb})"),
        applique(op, va, vb),
    )
}

/// Chaîne plate "a op b op c ..." : la référence applique * / puis + -,
/// de gauche à droite.
fn gen_chaine(rng: &mut Rng, longueur: usize) -> (String, Reference) {
    let (premier, v0) = gen_feuille(rng);
    let mut texte = premier;

    // termes additifs : (signe, produit courant)
    let mut termes: Vec<(char, Reference)> = Vec::new();
    let mut signe = '+';
    let mut produit = v0;

    for _ in 0..longueur {
        let op = gen_op(rng);
        let (g, v) = gen_feuille(rng);
        texte.push(op);
        texte.push_str(&g);

        match op {
            '*' | '/' => produit = applique(op, produit, v),
            _ => {
                termes.push((signe, produit));
                signe = op;
                produit = v;
            }
        }
    }
    termes.push((signe, produit));

    let mut acc: Reference = Some(0.0);
    for (i, (s, v)) in termes.into_iter().enumerate() {
        acc = if i == 0 { v } else { applique(s, acc, v) };
    }
    (texte, acc)
}

fn verifie(expr: &str, reference: Reference) {
    let t = parse(expr).unwrap_or_else(|e| panic!("expr={expr:?} lecture: {e}"));
    match (evaluate(&t), reference) {
        (Ok(n), Some(v)) => assert_meme_valeur(n.en_f64(), v, expr),
        (Err(e), None) => {
            assert_eq!(e.genre, Genre::Domaine, "expr={expr:?}");
            assert_eq!(e.message, "division by zero", "expr={expr:?}");
        }
        (Ok(n), None) => panic!("expr={expr:?} : attendu division par zéro, obtenu {n}"),
        (Err(e), Some(v)) => panic!("expr={expr:?} : attendu {v}, erreur {e}"),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_arbres_vs_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);
    let mut rng = Rng::new(0x5eed_0001);

    let mut testes = 0;
    while testes < 400 {
        let (expr, reference) = gen_arbre(&mut rng, 4);
        // une feuille seule n’est pas une expression (données insuffisantes)
        if !expr.contains(')') {
            continue;
        }
        verifie(&expr, reference);
        testes += 1;
        budget(t0, max);
    }
}

#[test]
fn fuzz_chaines_precedence() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);
    let mut rng = Rng::new(0x5eed_0002);

    for _ in 0..400 {
        let longueur = 1 + rng.pick(6) as usize;
        let (expr, reference) = gen_chaine(&mut rng, longueur);
        verifie(&expr, reference);
        budget(t0, max);
    }
}

#[test]
fn fuzz_caracteres_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);
    let mut rng = Rng::new(0x5eed_0003);

    let alphabet: Vec<char> = "0123456789..+-*/^V!%()  a&".chars().collect();

    for _ in 0..2000 {
        let longueur = rng.pick(12) as usize;
        let expr: String = (0..longueur)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // lecture déterministe
        let a = parse(&expr);
        let b = parse(&expr);
        assert_eq!(a, b, "expr={expr:?}");

        // jamais de panique ; toute erreur porte un genre et un message
        match a.and_then(|t| evaluate(&t)) {
            Ok(_) => {}
            Err(e) => assert!(!e.message.is_empty(), "expr={expr:?}"),
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_factorielles_bornees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);
    let mut rng = Rng::new(0x5eed_0004);

    for _ in 0..50 {
        let n = rng.pick(300);
        let expr = format!("{n}!");
        let t = parse(&expr).unwrap();
        let r = evaluate(&t).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        // n! est toujours >= 1 ; au-delà de 170! le f64 sature à inf
        let x = r.en_f64();
        assert!(x >= 1.0, "expr={expr:?}");
        if n <= 170 {
            assert!(x.is_finite(), "expr={expr:?}");
        }
        budget(t0, max);
    }
}
