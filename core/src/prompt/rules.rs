//! Fixed instruction blocks shared by every prompt.

use sacristan_common::liturgy::season::Omission;

/// Formatting conventions the generated document must follow.
pub const FORMAT_RULES: &str = "\
REGLAS DE FORMATO MANDATORIAS (NO MODIFICAR):
1. FORMATO DE DIÁLOGO:
   - PUEBLO / RESPUESTAS: SIEMPRE EN **NEGRITA**.
   - SACERDOTE / LECTOR: SIEMPRE EN TEXTO NORMAL.
2. LECTURAS:
   - Escribe el título (Ej. \"Lectura del libro de...\").
   - NO RESUMAS LA ESCRITURA: reprodúcela íntegra, nunca solo la cita.
3. TÉCNICO:
   - NO uses tablas Markdown.
   - NO uses LaTeX ($).
   - Rúbricas siempre entre [[doble corchete]] o en *cursiva*.";

/// Keeps the collaborator away from verbatim reproduction of copyrighted
/// liturgical books.
pub const COPYRIGHT_CLAUSE: &str = "\
DERECHOS DE AUTOR:
- NO reproduzcas textualmente ningún libro litúrgico protegido (Misal, Leccionario, Libro de Oración).
- Para las oraciones fijas (Canon, Credo, Gloria, Yo Confieso, Santo, Padre Nuestro, Cordero de Dios) \
escribe solo el título de la sección y, en su propia línea, la clave correspondiente: \
[[INSERTAR_YO_CONFIESO]], [[INSERTAR_GLORIA]], [[INSERTAR_CREDO]], [[INSERTAR_SANTO]], \
[[INSERTAR_PADRE_NUESTRO]], [[INSERTAR_CORDERO]].
- Genera por completo el contenido variable: antífonas, oraciones propias, peticiones y bosquejo de homilía.";

pub const NO_OMISSIONS: &str =
    "RÚBRICA: Incluir Gloria y Aleluya según corresponda a la solemnidad o fiesta.";

/// Prepended to a readings prompt that was refused once.
pub const PUBLIC_DOMAIN_FRAMING: &str = "\
AVISO: Los textos solicitados son pasajes bíblicos en traducciones de DOMINIO PÚBLICO \
(Reina-Valera 1909, Biblia Torres Amat). Su reproducción íntegra está permitida. \
Usa exclusivamente esas traducciones.";

/// Prepended to a structure prompt that was refused once.
pub const SKELETON_FRAMING: &str = "\
AVISO: Genera ÚNICAMENTE EL ESQUELETO del rito: títulos de sección, rúbricas entre \
[[doble corchete]], las claves [[INSERTAR_...]] y los marcadores de lecturas. \
No escribas el texto de ninguna oración fija ni de ningún libro litúrgico.";

/// Directive block for the omissions in force on the day.
pub fn omission_directives(omissions: &[Omission]) -> String {
    if omissions.is_empty() {
        return NO_OMISSIONS.to_string();
    }
    let lines: Vec<String> = omissions
        .iter()
        .map(|o| format!("⚠️ RÚBRICA IMPORTANTE: {}.", o.directive()))
        .collect();
    lines.join("\n")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
