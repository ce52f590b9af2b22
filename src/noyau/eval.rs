//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> extension directe (! ^ V %)
//!          \-> sinon shunting-yard -> RPN -> pile -> valeur
//!
//! Aucun état entre deux appels : chaque ligne repart de zéro.

use super::erreur::Erreur;
use super::extension::{perform, perform_avec_route, Route};
use super::jetons::{format_tokens, tokenize, Tok};
use super::nombre::Nombre;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub route: String,
    pub rpn: String,
    pub note: String,
}

/// Lecture : texte -> jetons (erreurs lexicales seulement).
pub fn parse(texte: &str) -> Result<Vec<Tok>, Erreur> {
    tokenize(texte)
}

/// Évaluation : jetons -> nombre (erreurs de syntaxe ou de domaine).
pub fn evaluate(tokens: &[Tok]) -> Result<Nombre, Erreur> {
    perform(tokens)
}

/// API publique : évalue une ligne et retourne:
/// - le résultat (Nombre)
/// - la démarche (jetons, route suivie, RPN si utilisée)
pub fn eval_expression(texte: &str) -> Result<(Nombre, DemarcheNoyau), Erreur> {
    // 1) Jetons
    let jetons = parse(texte).inspect_err(|e| log::debug!("{} sur {texte:?}: {e}", e.genre))?;
    let jetons_txt = format_tokens(&jetons);
    log::debug!("jetons: {jetons_txt}");

    // 2) Extension directe ou RPN
    let (n, route) = perform_avec_route(&jetons)
        .inspect_err(|e| log::debug!("{} sur {texte:?}: {e}", e.genre))?;

    let d = match route {
        Route::Directe(op) => {
            log::debug!("calcul direct: '{}'", op.symbole());
            DemarcheNoyau {
                jetons: jetons_txt,
                route: format!("direct ('{}')", op.symbole()),
                rpn: String::new(),
                note: "Extension operator: computed directly from the tokens.".into(),
            }
        }
        Route::Postfixe(rpn) => {
            let rpn_txt = format_tokens(&rpn);
            log::debug!("rpn: {rpn_txt}");
            DemarcheNoyau {
                jetons: jetons_txt,
                route: "postfix".into(),
                rpn: rpn_txt,
                note: "Pipeline: tokens → shunting-yard → RPN → stack.".into(),
            }
        }
    };

    Ok((n, d))
}
