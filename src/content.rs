//! The builtin deck.
//!
//! Fifteen slides on generative-AI concepts (the Kanny workshop deck),
//! constructed once at startup. This is the only production deck source;
//! nothing is parsed from files or the network at runtime.

use crate::types::{ContentItem, Deck, DiagramKind, LabLink, SlideLayout, SlideRecord};

/// Embedded lab: system-prompt playground.
const LAB_SYSTEM_PROMPT: &str = "https://dify.andres-wong.com/chatbot/ZM9Cfgj2LLfuIi6Q";
/// Embedded lab: RAG over documents.
const LAB_RAG_DOCS: &str = "https://dify.andres-wong.com/chatbot/GznXdVlxJoazwioC";
/// Embedded lab: RAG over internet sources.
const LAB_RAG_WEB: &str = "https://dify.andres-wong.com/chatbot/NYC8PDsL2o463U9j";

impl Deck {
    /// The fixed presentation deck.
    pub fn builtin() -> Deck {
        Deck {
            title: "Generando Soluciones con IA Generativa".to_string(),
            slides: vec![
                slide(
                    1,
                    "Generando Soluciones con IA Generativa: Conceptos Avanzados de IA (LLMs)",
                    "Explorando el potencial de los Modelos de Lenguaje Largos",
                    SlideLayout::Introductory,
                    "vibrant-gradient",
                    vec![
                        text(
                            "¡Bienvenidos! En esta presentación, profundizaremos en conceptos \
                             avanzados de Inteligencia Artificial Generativa, con un enfoque \
                             especial en los Modelos de Lenguaje Extensos (LLMs).",
                        ),
                        text(
                            "A lo largo de la sesión, utilizaremos una aplicación real en \
                             producción como ejemplo práctico para ilustrar estos conceptos.",
                        ),
                        text("Presentado por Andres Gonzalez Wong por parte de Enteracloud"),
                    ],
                ),
                slide(
                    2,
                    "Presentando Kanny - Gestión Inteligente de Tareas con IA",
                    "Un ejemplo práctico de IA generativa en acción",
                    SlideLayout::AppIntroduction,
                    "app-theme",
                    vec![
                        image(
                            "https://kanny.andres-wong.com/logo.png",
                            "Kanny - AI Intelligent Task Management Logo",
                        ),
                        text(
                            "**Kanny** es una plataforma de IA diseñada para la gestión \
                             inteligente de tareas en tableros Kanban.",
                        ),
                        text(
                            "En su backend, Kanny utiliza un **chatflow (Sistema Multi Agente - \
                             SMA)** impulsado por **Dify**, implementando **Function Calling** \
                             para una interacción inteligente.",
                        ),
                        text(
                            "El robusto *system prompt* de Kanny nos servirá para ejemplificar \
                             los conceptos avanzados de IA que exploraremos.",
                        ),
                        link(
                            "https://kanny.andres-wong.com/",
                            "Visita Kanny para más información",
                        ),
                        heading("🚀 Gestión Inteligente de Tareas"),
                        text(
                            "Kanny utiliza IA avanzada para optimizar tu flujo de trabajo en \
                             tableros Kanban, permitiéndote enfocarte en lo que realmente \
                             importa.",
                        ),
                    ],
                ),
                slide(
                    3,
                    "Fundamentos del Lenguaje Natural y el Prompting",
                    "Entendiendo la base de la interacción con la IA",
                    SlideLayout::BasicConcepts,
                    "neutral-blue",
                    vec![
                        heading("Lenguaje Natural (NLP)"),
                        text(
                            "🗣️ La capacidad de las máquinas para entender, interpretar y \
                             generar lenguaje humano.",
                        ),
                        heading("Prompt"),
                        text(
                            "✍️ La instrucción o pregunta que le damos a la IA para obtener una \
                             respuesta o acción.",
                        ),
                        heading("System Prompt"),
                        text(
                            "⚙️ Instrucciones de alto nivel que definen el comportamiento, el \
                             tono y las capacidades de la IA para toda la conversación. **Kanny \
                             utiliza un system prompt detallado para gestionar las interacciones \
                             de sus agentes.**",
                        ),
                    ],
                ),
                SlideRecord {
                    labs: vec![lab("🧪 Laboratorio: System Prompt", LAB_SYSTEM_PROMPT)],
                    ..slide(
                        4,
                        "El System Prompt: Definiendo las Reglas del Juego",
                        "El arte y la ciencia detrás de instruir modelos de IA",
                        SlideLayout::StructuredExplanation,
                        "purple-secondary",
                        vec![
                            heading("Las Reglas del Juego"),
                            text(
                                "🎮 El system prompt es como definir las reglas de un juego para \
                                 la IA: determina qué puede hacer, cómo debe comportarse y \
                                 cuáles son los límites de sus acciones. **Sin reglas claras, el \
                                 juego se vuelve caótico e impredecible.**",
                            ),
                            heading("Un Reto Complejo"),
                            text(
                                "🧩 Crear un system prompt efectivo es un reto complejo que \
                                 requiere precisión, creatividad y comprensión profunda del \
                                 contexto. **Por eso existe la ingeniería de prompts como \
                                 disciplina especializada.**",
                            ),
                            heading("Ejemplos para Concesionaria Optima"),
                            text(
                                "A continuación, tres ejemplos de system prompts para diferentes \
                                 roles en una concesionaria de automóviles:",
                            ),
                            heading("1. Asistente de Ventas"),
                            text(
                                "\"Eres un asistente virtual especializado de Optima Automotriz. \
                                 Tu función es proporcionar información precisa sobre modelos de \
                                 vehículos, opciones de financiamiento y promociones actuales. \
                                 Nunca inventes especificaciones técnicas y siempre prioriza la \
                                 satisfacción del cliente, dirigiéndolo al vendedor humano para \
                                 cerrar ventas.\"",
                            ),
                            text(
                                "**Explicación:** Este prompt define claramente los límites del \
                                 asistente (no inventar specs, no cerrar ventas) mientras \
                                 establece su expertise (información de vehículos, \
                                 financiamiento). Las restricciones evitan que el modelo genere \
                                 información falsa sobre vehículos, lo que podría tener \
                                 consecuencias legales y afectar la reputación de la \
                                 concesionaria.",
                            ),
                            heading("2. Soporte Técnico"),
                            text(
                                "\"Actúas como especialista de soporte técnico para Optima \
                                 Automotriz. Tu tarea es diagnosticar problemas de vehículos \
                                 basándote en síntomas descritos, recomendar mantenimiento \
                                 preventivo y programar citas con el taller. Siempre debes \
                                 aclarar que tus diagnósticos son preliminares y requieren \
                                 verificación profesional.\"",
                            ),
                            text(
                                "**Explicación:** Este prompt equilibra utilidad con \
                                 responsabilidad. El assistant puede brindar ayuda técnica \
                                 preliminar (ahorrando tiempo a mecánicos reales) pero incluye \
                                 un límite crucial: aclarar que sus diagnósticos son \
                                 preliminares. Esto mitiga riesgos de seguridad y \
                                 responsabilidad mientras sigue siendo útil para problemas \
                                 comunes.",
                            ),
                            heading("3. Asistente de Postventa"),
                            text(
                                "\"Eres el asistente de seguimiento postventa de Optima \
                                 Automotriz. Tu objetivo es recopilar feedback de clientes sobre \
                                 su experiencia de compra y satisfacción con el vehículo \
                                 adquirido. Debes mostrar empatía con problemas reportados, \
                                 escalar quejas al departamento adecuado y sugerir mejoras al \
                                 servicio basadas en los comentarios recopilados.\"",
                            ),
                            text(
                                "**Explicación:** Este prompt incorpora inteligencia emocional \
                                 (mostrar empatía), procesos organizacionales (escalamiento de \
                                 quejas) y análisis estratégico (sugerir mejoras). Está diseñado \
                                 para mantener relaciones positivas con clientes después de la \
                                 compra, un momento crítico para fidelización y referencias \
                                 futuras.",
                            ),
                            text(
                                "**Nota clave:** Todos estos system prompts comparten \
                                 características esenciales: definen el rol con claridad, \
                                 establecen límites precisos, especifican el tono de \
                                 comunicación y se alinean con los objetivos comerciales de \
                                 Optima sin prometer capacidades irreales.",
                            ),
                        ],
                    )
                },
                slide(
                    5,
                    "La Regla de 3 para System Prompts Efectivos",
                    "Estructura clara para guiar el comportamiento de la IA",
                    SlideLayout::StructuredExplanation,
                    "light-green",
                    vec![
                        heading("1. ¿Qué Recibe la IA?"),
                        text(
                            "💡 Define claramente el contexto y la información que la IA tendrá \
                             disponible. **En el caso de Kanny, esto incluye el estado del \
                             tablero Kanban, las tareas existentes y las interacciones del \
                             usuario.**",
                        ),
                        heading("2. ¿Qué Tiene que Hacer la IA?"),
                        text(
                            "🎯 Especifica la tarea, el objetivo o la acción que la IA debe \
                             realizar con la información proporcionada. **Para Kanny, esto \
                             puede ser crear una nueva tarea, mover una tarjeta o responder a \
                             una consulta.**",
                        ),
                        heading("3. ¿Qué Tiene que Devolver la IA?"),
                        text(
                            "📤 Indica el formato, el estilo y el tipo de salida que esperas de \
                             la IA. **Kanny devuelve actualizaciones del tablero, respuestas en \
                             lenguaje natural o llamadas a funciones específicas a través de \
                             Function Calling.**",
                        ),
                    ],
                ),
                slide(
                    6,
                    "La Nueva Era de la Adaptación de LLMs: Más Allá del Fine-tuning",
                    "Potencia tus aplicaciones con IA sin el costo del ajuste fino",
                    SlideLayout::ModernBold,
                    "blue-gradient",
                    vec![
                        text(
                            "🚀 La adaptación de modelos de lenguaje grandes (LLMs) ha \
                             evolucionado significativamente. Ya no dependemos exclusivamente \
                             del costoso y laborioso proceso de fine-tuning para \
                             personalizarlos. **Kanny demuestra cómo se pueden construir \
                             soluciones robustas sin un fine-tuning extenso.**",
                        ),
                        text(
                            "💡 Descubre cómo las técnicas de **Retrieval-Augmented Generation \
                             (RAG)** y plataformas innovadoras como **Dify** están \
                             revolucionando la forma en que integramos la IA en nuestras \
                             aplicaciones. **El backend de Kanny se apoya en Dify para \
                             orquestar su lógica.**",
                        ),
                    ],
                ),
                SlideRecord {
                    labs: vec![
                        lab("📄 Laboratorio: RAG - Documentos", LAB_RAG_DOCS),
                        lab("🌐 Laboratorio: RAG - Internet", LAB_RAG_WEB),
                    ],
                    ..slide(
                        7,
                        "El Poder de RAG: Contexto Relevante al Instante",
                        "Información precisa y actualizada sin modificar el modelo base",
                        SlideLayout::CleanInformative,
                        "blue-white",
                        vec![
                            diagram(DiagramKind::Rag),
                            heading("¿Qué es RAG?"),
                            text(
                                "📚 **Retrieval-Augmented Generation** enriquece las respuestas \
                                 de los LLMs con información relevante extraída de fuentes de \
                                 conocimiento externas en tiempo real. **Aunque Kanny se centra \
                                 en la gestión de tareas, podría usar RAG para acceder a \
                                 documentación o información adicional relevante para las \
                                 tareas.**",
                            ),
                            list(&[
                                "Búsqueda eficiente en bases de datos de conocimiento.",
                                "Integración de contexto específico a la consulta del usuario.",
                                "Respuestas más informadas, precisas y contextualizadas.",
                                "Evita la necesidad de re-entrenar el modelo con nuevos datos.",
                            ]),
                        ],
                    )
                },
                slide(
                    8,
                    "Sistemas Multi-Agente (SMA): Colaboración Inteligente",
                    "Múltiples agentes de IA trabajando juntos para resolver problemas complejos",
                    SlideLayout::MultiAgentSystem,
                    "purple-blue",
                    vec![
                        heading("¿Qué son los Sistemas Multi-Agente?"),
                        text(
                            "🤖 Los **Sistemas Multi-Agente (SMA)** son ecosistemas donde \
                             múltiples agentes de IA colaboran, cada uno con roles y \
                             capacidades específicas, para resolver problemas complejos que \
                             serían difíciles para un solo agente. **Kanny implementa un SMA \
                             donde diferentes agentes gestionan distintos aspectos de la \
                             organización de tareas.**",
                        ),
                        diagram(DiagramKind::MultiAgent),
                        list(&[
                            "Especialización: Cada agente se enfoca en tareas específicas donde \
                             destaca.",
                            "Escalabilidad: Fácil adición de nuevos agentes para nuevas \
                             funcionalidades.",
                            "Robustez: El sistema sigue funcionando incluso si un agente falla.",
                            "Eficiencia: Procesamiento paralelo de diferentes aspectos de un \
                             problema.",
                        ]),
                    ],
                ),
                slide(
                    9,
                    "Dify: Tu Plataforma Integral para Soluciones de IA",
                    "Construye, comparte y despliega aplicaciones de IA fácilmente",
                    SlideLayout::InnovativeInterface,
                    "purple-accent",
                    vec![
                        heading("¿Cómo Dify simplifica el desarrollo de IA?"),
                        text(
                            "🛠️ **Dify** ofrece un entorno intuitivo para construir diversas \
                             aplicaciones de IA, desde asistentes personales hasta soluciones \
                             para compartir con otros. **Kanny utiliza la potencia de Dify \
                             para definir su chatflow y la lógica de sus agentes.**",
                        ),
                        list(&[
                            "Interfaz visual para la creación de flujos de trabajo de IA.",
                            "Integración sencilla con modelos de lenguaje y bases de datos.",
                            "Capacidad para crear soluciones personalizadas sin necesidad de \
                             codificación extensa.",
                            "Opciones para compartir y desplegar tus aplicaciones. **Kanny es \
                             un ejemplo de una aplicación desplegada utilizando las \
                             capacidades de Dify.**",
                        ]),
                    ],
                ),
                slide(
                    10,
                    "Casos de Uso: Soluciones de IA a tu Alcance",
                    "Asistencia personalizada y herramientas compartidas",
                    SlideLayout::CollaborativeSolutions,
                    "green-secondary",
                    vec![
                        heading("Asistencia Personalizada con IA"),
                        text(
                            "🤖 Crea asistentes virtuales inteligentes que te ayuden con tareas \
                             diarias, respondan preguntas específicas o automaticen flujos de \
                             trabajo. **Kanny actúa como un asistente personalizado para la \
                             gestión de tareas en tableros Kanban.**",
                        ),
                        heading("Soluciones Compartidas para tu Equipo o Comunidad"),
                        text(
                            "🤝 Desarrolla herramientas de IA que puedan ser utilizadas por \
                             otros, facilitando el acceso a información y la resolución de \
                             problemas de manera colaborativa. **Kanny es una plataforma que \
                             puede ser utilizada por equipos para mejorar su productividad.**",
                        ),
                    ],
                ),
                slide(
                    11,
                    "Agentes de IA y Function Calling: Interacción Inteligente con tus \
                     Aplicaciones",
                    "Lleva la automatización a un nuevo nivel",
                    SlideLayout::TechnicalIntegration,
                    "gray-contrast",
                    vec![
                        heading("Function Calling: La Clave para la Acción"),
                        text(
                            "⚙️ Utiliza la capacidad de **Function Calling** para permitir que \
                             los modelos de IA interactúen directamente con tus aplicaciones y \
                             servicios externos. **El backend de Kanny utiliza intensivamente \
                             Function Calling a través de Dify para interactuar con su lógica \
                             de gestión de tareas.**",
                        ),
                        heading("Creación de Agentes de IA Autónomos"),
                        text(
                            "🧠 Construye agentes inteligentes que pueden tomar decisiones, \
                             ejecutar tareas y aprender de sus interacciones, todo ello sin un \
                             fine-tuning extensivo. **Los diferentes componentes del chatflow \
                             de Kanny actúan como agentes que colaboran para gestionar las \
                             tareas.**",
                        ),
                    ],
                ),
                slide(
                    12,
                    "Ejemplo 1: Asistente de Ventas Inteligente",
                    "Combinando System Prompt, RAG, SMA y Function Calling",
                    SlideLayout::ExampleCase,
                    "blue-accent",
                    vec![
                        heading("Arquitectura del Sistema"),
                        text(
                            "🔍 Un asistente de ventas que ayuda a los representantes a acceder \
                             a información de productos, historial de clientes y \
                             recomendaciones personalizadas en tiempo real durante las \
                             llamadas con clientes.",
                        ),
                        diagram(DiagramKind::SalesAssistant),
                        list(&[
                            "**System Prompt**: Define el rol del asistente como experto en \
                             ventas y establece el tono profesional.",
                            "**RAG**: Recupera información actualizada de productos y precios \
                             desde la base de datos de la empresa.",
                            "**SMA**: Utiliza agentes especializados para análisis de \
                             sentimiento, recomendaciones y búsqueda de información.",
                            "**Function Calling**: Permite al asistente actualizar el CRM, \
                             programar seguimientos y enviar cotizaciones.",
                        ]),
                    ],
                ),
                slide(
                    13,
                    "Ejemplo 2: Análisis Automático de Documentos Legales",
                    "Integrando tecnologías avanzadas de IA",
                    SlideLayout::ExampleCase,
                    "indigo-accent",
                    vec![
                        heading("Flujo de Trabajo"),
                        text(
                            "📄 Sistema que analiza contratos y documentos legales, identifica \
                             cláusulas importantes, riesgos potenciales y sugiere \
                             modificaciones basadas en precedentes legales.",
                        ),
                        diagram(DiagramKind::LegalAnalysis),
                        list(&[
                            "**System Prompt**: Instruye al modelo para actuar como un \
                             asistente legal experto con enfoque en análisis de riesgos.",
                            "**RAG**: Consulta bases de datos de precedentes legales y \
                             regulaciones actualizadas.",
                            "**SMA**: Diferentes agentes analizan distintas secciones del \
                             documento (obligaciones, plazos, penalizaciones).",
                            "**Function Calling**: Genera reportes estructurados, marca \
                             secciones críticas y sugiere cambios específicos.",
                        ]),
                    ],
                ),
                slide(
                    14,
                    "Ejemplo 3: Asistente de Investigación Científica",
                    "Potenciando la investigación con IA avanzada",
                    SlideLayout::ExampleCase,
                    "green-accent",
                    vec![
                        heading("Componentes del Sistema"),
                        text(
                            "🔬 Plataforma que ayuda a investigadores a mantenerse actualizados \
                             con los últimos avances, analizar datos experimentales y generar \
                             hipótesis basadas en la literatura científica.",
                        ),
                        diagram(DiagramKind::ResearchAssistant),
                        list(&[
                            "**System Prompt**: Configura el asistente para mantener rigor \
                             científico y citar fuentes adecuadamente.",
                            "**RAG**: Recupera información de papers científicos recientes, \
                             bases de datos especializadas y repositorios.",
                            "**SMA**: Agentes especializados en análisis estadístico, revisión \
                             de literatura y visualización de datos.",
                            "**Function Calling**: Genera gráficos, ejecuta análisis \
                             estadísticos y formatea referencias bibliográficas.",
                        ]),
                    ],
                ),
                slide(
                    15,
                    "Conclusión: Un Futuro de IA Flexible y Adaptable",
                    "Desbloquea el potencial de los LLMs sin las limitaciones del pasado",
                    SlideLayout::FuturisticVision,
                    "purple-blue-gradient",
                    vec![
                        text(
                            "✨ RAG y plataformas como Dify están democratizando el acceso a la \
                             potencia de los LLMs, permitiendo una adaptación rápida y \
                             eficiente a nuestras necesidades. **Kanny es un testimonio de \
                             esta flexibilidad y adaptabilidad.**",
                        ),
                        text(
                            "🚀 Explora las posibilidades de construir soluciones de IA \
                             innovadoras, desde asistentes personales hasta agentes autónomos, \
                             sin la complejidad del fine-tuning tradicional. **Inspírate en \
                             Kanny y comienza a crear tus propias soluciones.**",
                        ),
                    ],
                ),
            ],
        }
    }
}

// ============================================================================
// INTERNAL: record constructors
// ============================================================================

fn slide(
    sequence_number: u32,
    title: &str,
    subtitle: &str,
    layout: SlideLayout,
    color_scheme: &str,
    content: Vec<ContentItem>,
) -> SlideRecord {
    SlideRecord {
        sequence_number,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        content,
        layout,
        color_scheme: color_scheme.to_string(),
        labs: Vec::new(),
    }
}

fn text(value: &str) -> ContentItem {
    ContentItem::Text {
        value: value.to_string(),
    }
}

fn heading(value: &str) -> ContentItem {
    ContentItem::Heading {
        value: value.to_string(),
    }
}

fn image(url: &str, alt_text: &str) -> ContentItem {
    ContentItem::Image {
        url: url.to_string(),
        alt_text: alt_text.to_string(),
    }
}

fn link(url: &str, label: &str) -> ContentItem {
    ContentItem::Link {
        url: url.to_string(),
        label: label.to_string(),
    }
}

fn list(items: &[&str]) -> ContentItem {
    ContentItem::List {
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn diagram(kind: DiagramKind) -> ContentItem {
    ContentItem::Diagram { kind }
}

fn lab(title: &str, url: &str) -> LabLink {
    LabLink {
        title: title.to_string(),
        url: url.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
