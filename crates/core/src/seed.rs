// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bundled seed data
//!
//! The canned content every fresh installation starts from. The store
//! service writes these lists into the durable partition the first time a
//! collection is read; they are read-only input and never mutated at
//! runtime. Making one installation's edits permanent means pasting the
//! admin seed snapshot back into this module and bumping the data
//! version.

use crate::blog::BlogPost;
use crate::category::CATEGORY_ALL;
use crate::fair::{Fair, FairStatus};
use crate::history::HistoryEvent;
use crate::product::Product;

pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Bolso Tote Artesanal \"Boho Chic\"".into(),
            description: "Pieza única de estilo bohemio, confeccionada artesanalmente. \
                Combina vibrante cuero azul y gris con dinámicos flecos amarillos. Destaca \
                su medallón central de cuero plateado con incrustación turquesa. Un \
                accesorio audaz y con carácter."
                .into(),
            price_uyu: 5800,
            price_usd: 145,
            category: "Carteras".into(),
            images: vec![
                "https://drive.google.com/file/d/1anp427tiOl9TOxnBmLpendcxQqixPJ5B/view?usp=drive_link".into(),
            ],
            materials: vec![
                "Cuero azul y gris".into(),
                "Flecos de cuero amarillo".into(),
                "Incrustación turquesa".into(),
            ],
            colors: vec!["Azul".into(), "Gris".into(), "Amarillo".into()],
            dimensions: "35cm x 30cm x 12cm".into(),
            is_featured: true,
        },
        Product {
            id: "2".into(),
            name: "Bolso Tote de Cuero \"Serpiente Rosa\"".into(),
            description: "Exclusivo bolso tote elaborado a mano. Impresiona por su cuero \
                de alta calidad con textura estilo piel de serpiente en un intenso color \
                rosa fucsia. Diseño moderno complementado con elegantes herrajes metálicos \
                circulares."
                .into(),
            price_uyu: 6500,
            price_usd: 160,
            category: "Carteras".into(),
            images: vec![
                "https://drive.google.com/file/d/14iwM_Ve8_i570wAU724w2x4W1GRViOVV/view?usp=drive_link".into(),
            ],
            materials: vec![
                "Cuero texturizado serpiente".into(),
                "Herrajes metálicos".into(),
            ],
            colors: vec!["Rosa Fucsia".into()],
            dimensions: "32cm x 28cm x 10cm".into(),
            is_featured: true,
        },
        Product {
            id: "3".into(),
            name: "Bolso Duffel de Cuero Marrón".into(),
            description: "Espacioso bolso de viaje tipo duffel, confeccionado expertamente \
                en cuero marrón robusto y duradero. Cuenta con asas de mano reforzadas y \
                correa de hombro ajustable con resistentes herrajes de metal envejecido. \
                Estilo rústico y atemporal para tus escapadas."
                .into(),
            price_uyu: 8900,
            price_usd: 220,
            category: "Accesorios".into(),
            images: vec![
                "https://drive.google.com/file/d/1kEYWlpPGrf-mUAK605m00SCbR5kapSLm/view?usp=drive_link".into(),
            ],
            materials: vec![
                "Cuero marrón robusto".into(),
                "Metal envejecido".into(),
            ],
            colors: vec!["Marrón".into()],
            dimensions: "50cm x 30cm x 25cm".into(),
            is_featured: true,
        },
    ]
}

pub fn default_fairs() -> Vec<Fair> {
    vec![
        Fair {
            id: "f1".into(),
            name: "Feria Ideas+".into(),
            date: "2025-12-01".into(),
            city: "Montevideo".into(),
            location: "Parque Rodó".into(),
            description: "Estaremos presentes en el stand 45 con toda la nueva colección \
                de verano."
                .into(),
            image_url: Some(
                "https://images.unsplash.com/photo-1531058020387-3be344556be6?w=800".into(),
            ),
            maps_url: Some("https://goo.gl/maps/xyz".into()),
            status: FairStatus::Upcoming,
        },
        Fair {
            id: "f2".into(),
            name: "Fiesta de la Patria Gaucha".into(),
            date: "2025-03-10".into(),
            city: "Tacuarembó".into(),
            location: "Laguna de las Lavanderas".into(),
            description: "Un éxito total, gracias a todos los que pasaron a saludar.".into(),
            image_url: Some(
                "https://images.unsplash.com/photo-1531058020387-3be344556be6?w=800".into(),
            ),
            maps_url: None,
            status: FairStatus::Past,
        },
    ]
}

pub fn default_history() -> Vec<HistoryEvent> {
    vec![
        HistoryEvent {
            id: "h1".into(),
            year: "1998".into(),
            title: "El Comienzo".into(),
            description: "Todo comenzó en un pequeño taller familiar en el interior de \
                Uruguay. Lo que empezó como un hobby, reparando monturas y aperos viejos, \
                despertó una curiosidad profunda por la nobleza del cuero."
                .into(),
            image_url: "https://images.unsplash.com/photo-1605218427368-35b158650a64?w=800"
                .into(),
        },
        HistoryEvent {
            id: "h2".into(),
            year: "2010".into(),
            title: "El Oficio".into(),
            description: "Aprendimos que el cuero tiene memoria, que cada pieza respira. \
                Nos especializamos en la talabartería tradicional, respetando los tiempos \
                que exige el material."
                .into(),
            image_url: "https://images.unsplash.com/photo-1598532163257-52648740d12e?w=800"
                .into(),
        },
        HistoryEvent {
            id: "h3".into(),
            year: "2024".into(),
            title: "MARIEL'LA Hoy".into(),
            description: "Hoy, MARIEL'LA es sinónimo de calidad artesanal. No somos una \
                fábrica; somos un taller donde cada cliente se lleva una parte de nuestra \
                historia."
                .into(),
            image_url: "https://images.unsplash.com/photo-1473188588951-e5d7eda7b6ac?w=800"
                .into(),
        },
    ]
}

pub fn default_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "b4".into(),
            title: "MARIEL'LA en AM 770 Oriental".into(),
            excerpt: "Estuvimos conversando sobre la pasión por la artesanía y nuestras \
                nuevas creaciones en la radio."
                .into(),
            content: "Queremos expresar nuestro profundo agradecimiento a AM 770 Oriental \
                por abrirnos las puertas de su estudio. Fue un placer inmenso poder \
                compartir con la audiencia nuestra pasión por el cuero, el proceso \
                creativo detrás de cada pieza única y las historias que dan vida a \
                MARIEL'LA. Gracias por apoyar la artesanía uruguaya y permitirnos \
                difundir nuestro arte. ¡Seguimos creando con más inspiración que nunca!"
                .into(),
            author: "Mariela Calistro".into(),
            date: "20 Mar 2025".into(),
            read_time: "Escuchar nota".into(),
            image_url:
                "https://drive.google.com/file/d/1p0rhmnjphBl7F9ZVFLl-PagsD1YYysTt/view?usp=drive_link"
                    .into(),
        },
        BlogPost {
            id: "b1".into(),
            title: "El Cuero en la Identidad Uruguaya".into(),
            excerpt: "¿Sabías que Uruguay tiene una de las tradiciones de cuero más ricas \
                del mundo? Descubre por qué nuestras piezas son únicas."
                .into(),
            content: "Desde los tiempos de la colonia, la ganadería ha sido el motor de \
                nuestro país, y con ella, el oficio del guasquero y el talabartero. El \
                cuero uruguayo es reconocido mundialmente no solo por su calidad, sino \
                por el tratamiento natural que se le da. A diferencia de las producciones \
                industriales masivas, en Uruguay todavía valoramos el curtido vegetal, un \
                proceso lento que utiliza taninos naturales de cortezas de árboles en \
                lugar de cromo tóxico. Esto resulta en un cuero que respira, que huele a \
                naturaleza y que desarrolla una pátina única con los años. Al comprar una \
                pieza local, no solo llevás un objeto, llevás siglos de tradición gaucha."
                .into(),
            author: "Mariela Calistro".into(),
            date: "15 Ene 2025".into(),
            read_time: "3 min lectura".into(),
            image_url:
                "https://drive.google.com/file/d/1qeN28si1WAj_TmotiGxcENBATPK1Ugze/view?usp=drive_link"
                    .into(),
        },
        BlogPost {
            id: "b2".into(),
            title: "Curiosidades: Grano Pleno vs. Cuero Genuino".into(),
            excerpt: "No todo el cuero es igual. Aprende a distinguir la calidad y por qué \
                elegimos trabajar solo con lo mejor."
                .into(),
            content: "En el mundo de la marroquinería existen muchos términos confusos. \
                'Genuine Leather' (Cuero Genuino) suena bien, ¿verdad? En realidad, es \
                una de las calidades más bajas; se hace con las capas inferiores de la \
                piel que sobran tras separar la parte buena. En MARIEL'LA utilizamos \
                'Full Grain' (Grano Pleno). Es la capa superior de la piel, la más \
                resistente y la única que conserva la textura natural del animal, \
                incluidas sus imperfecciones que lo hacen único. Es un cuero que nunca se \
                pela, solo se embellece. Es más difícil de trabajar y requiere artesanos \
                expertos, pero la diferencia se nota al tacto y en la durabilidad de \
                décadas."
                .into(),
            author: "Mariela Calistro".into(),
            date: "28 Feb 2025".into(),
            read_time: "4 min lectura".into(),
            image_url: "https://images.unsplash.com/photo-1559563458-527698bf5295?w=800"
                .into(),
        },
        BlogPost {
            id: "b3".into(),
            title: "Guía Definitiva: Cómo Cuidar tu Cuero".into(),
            excerpt: "Secretos del taller para que tu cartera o cinto dure para siempre y \
                luzca mejor cada día."
                .into(),
            content: "El cuero es piel, y como tal, necesita hidratación. 1. \
                **Hidratación**: Una vez cada 6 meses, aplica una crema hidratante \
                incolora o grasa de potro con un paño suave. 2. **Agua**: Si se moja, \
                nunca lo seques al sol o con secador, eso lo acartona. Dejalo secar a la \
                sombra naturalmente. 3. **Almacenamiento**: Guardá tus carteras rellenas \
                de papel para que mantengan la forma y en bolsas de tela (nunca plástico) \
                para que respiren. 4. **Manchas**: Si se mancha con aceite, cubrilo con \
                talco inmediatamente y dejalo actuar 24 horas. Siguiendo estos pasos, tus \
                piezas MARIEL'LA serán herencia para la próxima generación."
                .into(),
            author: "Mariela Calistro".into(),
            date: "10 Mar 2025".into(),
            read_time: "2 min lectura".into(),
            image_url:
                "https://drive.google.com/file/d/1A8uunxmriIof4e23Zr1xO7HdmIVdHTuY/view?usp=drive_link"
                    .into(),
        },
    ]
}

pub fn default_categories() -> Vec<String> {
    [
        CATEGORY_ALL,
        "Carteras",
        "Billeteras",
        "Cintos",
        "Mochilas",
        "Accesorios",
    ]
    .iter()
    .map(|c| (*c).to_string())
    .collect()
}
